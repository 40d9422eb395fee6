//! adname
//!
//! Builds creative names from field values and reads field values back out of
//! existing names. Results go to stdout; logs go to stderr (`RUST_LOG`).

use std::io::{self, BufRead, Write};

use adname_core::{
    AdNameError, AdType, Angle, Category, CreativeFields, Creator, DATE_FORMAT, DecoderConfig,
    FileExtension, Format, MediaBuyer, NameDecoder, Role, Variation, canonicalize_angle, encode,
    validate_date,
};
use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "adname")]
#[command(about = "Encode and decode ad-creative names")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Date stamped on designer names (DD.MM.YYYY); defaults to the local date
    #[arg(long, global = true, env = "ADNAME_TODAY")]
    today: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a creative name from field values
    Encode(EncodeArgs),
    /// Recover field values from creative names (JSON, one object per name)
    Decode {
        /// Names to decode; read line by line from stdin when omitted
        names: Vec<String>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,

        /// Always read names as designer-shaped, even with an ad-type prefix
        #[arg(long)]
        no_layout_detection: bool,
    },
    /// Turn a designer name into a media-buyer name, keeping its date
    Restamp {
        /// Ad type code (NC, SC)
        #[arg(long)]
        ad_type: AdType,

        /// Media buyer code (TG, AK)
        #[arg(long)]
        media_buyer: MediaBuyer,

        /// Existing creative name, including its file extension
        name: String,
    },
}

#[derive(Args, Debug)]
struct EncodeArgs {
    /// Template to use (designer, media-buyer)
    #[arg(long, env = "ADNAME_ROLE", default_value = "designer")]
    role: Role,

    /// Format code (VI, IA, IC)
    #[arg(long)]
    format: Option<Format>,

    /// Creator code (SS, AS, MS, SP, LP, WM, CA, AI)
    #[arg(long)]
    creation: Option<Creator>,

    /// Product name, words separated by spaces
    #[arg(long)]
    product: Option<String>,

    /// Category code (AN, BR, ER, NK, RG, ST, SHS)
    #[arg(long)]
    category: Option<Category>,

    /// Angle label (UGC, EGC, "Single Image", Storytelling, "Customer Testimonial", Other)
    #[arg(long)]
    angle: Option<String>,

    /// Angle text used with `--angle Other`
    #[arg(long)]
    custom_angle: Option<String>,

    /// Variation number; omit or 0 for V00
    #[arg(long)]
    variation: Option<u32>,

    /// Creative date for media-buyer names (DD.MM.YYYY)
    #[arg(long)]
    date: Option<String>,

    /// Ad type code for media-buyer names (NC, SC)
    #[arg(long)]
    ad_type: Option<AdType>,

    /// Media buyer code for media-buyer names (TG, AK)
    #[arg(long)]
    media_buyer: Option<MediaBuyer>,

    /// File extension for media-buyer names (.mp4, .png, .jpg, .jpeg)
    #[arg(long)]
    extension: Option<FileExtension>,
}

impl EncodeArgs {
    /// Builds the field set, checking free-form values.
    fn into_fields(self) -> Result<CreativeFields> {
        if self.role == Role::Designer
            && (self.ad_type.is_some() || self.media_buyer.is_some() || self.extension.is_some())
        {
            warn!("ad type, media buyer and extension are ignored for designer names");
        }

        let variation = match self.variation {
            None | Some(0) => None,
            Some(n) => Some(Variation::numbered(n)?),
        };

        let fields = CreativeFields {
            role: self.role,
            format: self.format,
            creation: self.creation,
            product: self.product,
            category: self.category,
            angle: resolve_angle(self.angle.as_deref(), self.custom_angle),
            variation,
            date: self.date,
            media_buyer: self.media_buyer,
            ad_type: self.ad_type,
            file_extension: self.extension,
        };
        fields.validate().context("invalid field value")?;

        if !fields.is_complete() {
            warn!("some segments are unset; the name will contain empty segments");
        }
        Ok(fields)
    }
}

/// Maps the angle picker value and custom text onto an [`Angle`].
///
/// `Other` takes the custom text; any other label is canonicalized, so an
/// unknown label is kept as custom text too.
fn resolve_angle(angle: Option<&str>, custom: Option<String>) -> Option<Angle> {
    match angle {
        Some(label) if label.trim().eq_ignore_ascii_case("other") => {
            Some(Angle::Other(custom.unwrap_or_default()))
        }
        Some(label) => Some(canonicalize_angle(label)),
        None => custom.map(Angle::Other),
    }
}

/// Today's date as stamped on designer names.
fn today(override_date: Option<String>) -> Result<String> {
    match override_date {
        Some(date) => {
            validate_date(&date).context("invalid --today")?;
            Ok(date)
        }
        None => Ok(chrono::Local::now().format(DATE_FORMAT).to_string()),
    }
}

/// One decoded name.
#[derive(Debug, Serialize)]
struct DecodeOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    fields: CreativeFields,
    complete: bool,
}

fn write_decoded(
    out: &mut impl Write,
    decoder: &NameDecoder,
    input: &str,
    pretty: bool,
) -> Result<()> {
    let fields = decoder.decode(input);
    debug!(%fields, "decoded");
    let output = DecodeOutput {
        input,
        complete: fields.is_complete(),
        fields,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    writeln!(out, "{json}")?;
    Ok(())
}

fn run_decode(names: Vec<String>, pretty: bool, no_layout_detection: bool) -> Result<()> {
    let config = DecoderConfig::new().with_layout_detection(!no_layout_detection);
    let decoder = NameDecoder::with_config(config)?;
    let mut out = io::stdout().lock();

    if names.is_empty() {
        info!("reading names from stdin");
        for line in io::stdin().lock().lines() {
            let line = line.context("failed to read stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            write_decoded(&mut out, &decoder, line, pretty)?;
        }
        return Ok(());
    }

    for name in &names {
        let name = name.trim();
        if name.is_empty() {
            return Err(AdNameError::EmptyInput.into());
        }
        write_decoded(&mut out, &decoder, name, pretty)?;
    }
    Ok(())
}

fn restamp(name: &str, ad_type: AdType, media_buyer: MediaBuyer) -> Result<String> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AdNameError::EmptyInput.into());
    }

    let decoded = NameDecoder::new()?.decode(name);
    if decoded.role == Role::MediaBuyer {
        warn!(%name, "name already carries a media-buyer prefix; replacing it");
    }
    if decoded.file_extension.is_none() {
        warn!(%name, "no file extension recognized");
    }

    let fields = CreativeFields {
        role: Role::MediaBuyer,
        ad_type: Some(ad_type),
        media_buyer: Some(media_buyer),
        ..decoded
    };
    if !fields.is_complete() {
        bail!("could not recover every segment of {name:?}; refusing to restamp");
    }

    // Media-buyer names keep the decoded date, so `today` is never used.
    Ok(encode(&fields, ""))
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Encode(args) => {
            let today = today(cli.today)?;
            let fields = args.into_fields()?;
            let name = encode(&fields, &today);
            info!(%name, "encoded");
            println!("{name}");
        }
        Commands::Decode {
            names,
            pretty,
            no_layout_detection,
        } => run_decode(names, pretty, no_layout_detection)?,
        Commands::Restamp {
            ad_type,
            media_buyer,
            name,
        } => {
            let restamped = restamp(&name, ad_type, media_buyer)?;
            println!("{restamped}");
        }
    }

    Ok(())
}
