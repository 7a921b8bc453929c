use std::io::{self, BufRead, Write};

use anyhow::{bail, Context};
use clap::Parser;
use colorfmt::{parse, Representation, RgbFloat, RgbInt};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod clipboard;

#[derive(Parser)]
#[command(name = "huepick")]
#[command(about = "Convert a color between sRGB representations and copy one to the clipboard")]
struct Cli {
    /// Color string to convert, e.g. "#abc", "rgb(255, 0, 0)" or "0.5 0.5 0.5".
    /// Reads from an interactive prompt when omitted.
    color: Option<String>,

    /// Print the conversions and exit without the clipboard prompt
    #[arg(long)]
    no_copy: bool,
}

/// A conversion the user can pick from the menu.
struct ConversionOption {
    /// Format name shown next to the value.
    name: &'static str,
    /// The converted value in its textual form.
    value: String,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "huepick=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    let cli = Cli::parse();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    let rep = match cli.color {
        Some(raw) => parse(&raw)?,
        None => interactive(&mut input, &mut out)?,
    };
    tracing::debug!(format = rep.format_name(), color = %rep.color(), "parsed input");

    writeln!(out)?;
    writeln!(out, " Input ({})\t{}", rep.format_name(), rep)?;
    writeln!(out)?;
    let options = conversion_options(&rep);
    for (i, opt) in options.iter().enumerate() {
        writeln!(out, " [{}] {}\t{}", i + 1, opt.name, opt.value)?;
    }
    writeln!(out)?;

    if !cli.no_copy {
        copy_prompt(&mut input, &mut out, &options)?;
    }
    Ok(())
}

/// Every rendering of the parsed color, in menu order.
fn conversion_options(rep: &Representation) -> Vec<ConversionOption> {
    let color = rep.color();
    let hex = color.hex();
    let rgb = RgbInt::from(color);
    let rgb_float = RgbFloat::from(color);

    vec![
        ConversionOption {
            name: "sRGB",
            value: color.value().to_string(),
        },
        ConversionOption {
            name: "Hex",
            value: hex.as_str().to_string(),
        },
        ConversionOption {
            name: "Hex",
            value: hex.prefixed(),
        },
        ConversionOption {
            name: "RGB",
            value: rgb.triplet(),
        },
        ConversionOption {
            name: "RGB",
            value: rgb.to_string(),
        },
        ConversionOption {
            name: "RGB",
            value: rgb_float.to_string(),
        },
    ]
}

/// Prompt until a parseable color arrives. Parse failures print and
/// re-prompt; EOF aborts.
fn interactive(input: &mut impl BufRead, out: &mut impl Write) -> anyhow::Result<Representation> {
    loop {
        write!(out, "> ")?;
        out.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line).context("reading color input")? == 0 {
            bail!("no color given");
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match parse(line) {
            Ok(rep) => return Ok(rep),
            Err(err) => writeln!(out, "{err}")?,
        }
    }
}

/// Read a 1-based menu index and copy that option's value to the clipboard.
///
/// Empty input, EOF and anything that is not a listed index skip the copy
/// quietly; a clipboard failure prints but does not abort.
fn copy_prompt(
    input: &mut impl BufRead,
    out: &mut impl Write,
    options: &[ConversionOption],
) -> anyhow::Result<()> {
    write!(out, "> ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(());
    }
    let Ok(choice) = line.trim().parse::<usize>() else {
        return Ok(());
    };
    let Some(option) = choice.checked_sub(1).and_then(|i| options.get(i)) else {
        return Ok(());
    };

    match clipboard::copy_text(&option.value) {
        Ok(()) => writeln!(out, "{} value copied to clipboard.", option.name)?,
        Err(err) => writeln!(out, "Error copying to clipboard: {err}")?,
    }
    Ok(())
}
