#![forbid(unsafe_code)]

//! Sundbyberg CLI — inspect the signed parts of WS-Security protected ebMS messages.

use base64::Engine;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::process;
use sundbyberg_core::{algorithm, ns, Result};
use sundbyberg_ebms::{MessageUnit, Payload, SignedPartMetadata, UserMessage};
use sundbyberg_wss::{default_signature, X509ReferenceType};
use sundbyberg_xml::Envelope;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "sundbyberg",
    about = "Sundbyberg — signed part resolution for ebMS messages",
    version
)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show which parts of a message are covered by its signature
    Parts {
        /// SOAP envelope XML file
        file: PathBuf,

        /// Attachment payload URI (repeatable)
        #[arg(short = 'p', long = "payload")]
        payload: Vec<String>,

        /// The message carries a payload in the SOAP body
        #[arg(long = "body-payload")]
        body_payload: bool,

        /// Register additional ID attribute names
        #[arg(long = "id-attr")]
        id_attr: Vec<String>,

        /// Digest value encoding
        #[arg(long, value_enum, default_value_t = Encoding::Base64)]
        encoding: Encoding,
    },

    /// Print the id of the ebMS header
    HeaderId {
        /// SOAP envelope XML file
        file: PathBuf,

        /// Register additional ID attribute names
        #[arg(long = "id-attr")]
        id_attr: Vec<String>,
    },

    /// Generate a random password
    Password,

    /// List known namespaces and digest algorithms
    Info,
}

#[derive(Clone, Copy, ValueEnum)]
enum Encoding {
    Base64,
    Hex,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Parts {
            file,
            payload,
            body_payload,
            id_attr,
            encoding,
        } => cmd_parts(file, payload, body_payload, id_attr, encoding),

        Commands::HeaderId { file, id_attr } => cmd_header_id(file, id_attr),

        Commands::Password => {
            println!("{}", sundbyberg_wss::generate_password());
            Ok(())
        }

        Commands::Info => cmd_info(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_parts(
    file: PathBuf,
    payload_uris: Vec<String>,
    body_payload: bool,
    id_attr: Vec<String>,
    encoding: Encoding,
) -> Result<()> {
    let envelope = load_envelope(&file, &id_attr)?;

    let mut payloads: Vec<Payload> = payload_uris.into_iter().map(Payload::attachment).collect();
    if body_payload {
        payloads.push(Payload::body(None));
    }
    let units = vec![MessageUnit::User(UserMessage {
        message_id: file.display().to_string(),
        payloads,
    })];

    tracing::debug!(file = %file.display(), "resolving signed parts");
    let Some(info) = sundbyberg_ebms::match_signed_parts(&envelope, &units)? else {
        println!("unsigned");
        return Ok(());
    };

    let doc = envelope.parse_doc()?;
    if let Some(key_ref) = default_signature(&doc).and_then(X509ReferenceType::of_signature) {
        println!("key reference: {key_ref}");
    }

    match info.header() {
        Some(meta) => println!("ebMS header: {}", describe(meta, encoding)),
        None => println!("ebMS header: not signed"),
    }
    for payload in units.iter().filter_map(MessageUnit::payloads).flatten() {
        let name = match payload.declared_uri() {
            Some(uri) => uri.to_owned(),
            None => "<body>".to_owned(),
        };
        match info.payload(payload) {
            Some(meta) => println!("payload {name}: {}", describe(meta, encoding)),
            None => println!("payload {name}: not signed"),
        }
    }
    Ok(())
}

fn cmd_header_id(file: PathBuf, id_attr: Vec<String>) -> Result<()> {
    let envelope = load_envelope(&file, &id_attr)?;
    let doc = envelope.parse_doc()?;
    match sundbyberg_ebms::ebms_header_id(&doc, envelope.id_schema())? {
        Some(id) => println!("{id}"),
        None => println!("ebMS header has no id"),
    }
    Ok(())
}

fn cmd_info() -> Result<()> {
    println!("Sundbyberg — signed part resolution for ebMS messages");
    println!();
    println!("Namespaces:");
    println!("  SOAP 1.1:  {}", ns::SOAP11);
    println!("  SOAP 1.2:  {}", ns::SOAP12);
    println!("  wsse:      {}", ns::WSSE);
    println!("  wsu:       {}", ns::WSU);
    println!("  ds:        {}", ns::DSIG);
    println!("  eb:        {}", ns::EBMS3);
    println!();
    println!("Identifier attributes (in order):");
    println!("  wsu:Id, xml:id, DTD or --id-attr declared ID attributes");
    println!();
    println!("Known digest algorithms:");
    for uri in [
        algorithm::SHA1,
        algorithm::SHA224,
        algorithm::SHA256,
        algorithm::SHA384,
        algorithm::SHA512,
        algorithm::SHA3_224,
        algorithm::SHA3_256,
        algorithm::SHA3_384,
        algorithm::SHA3_512,
    ] {
        println!("  {:<9} {uri}", algorithm::digest_name(uri).unwrap_or("?"));
    }
    Ok(())
}

// ── Utility functions ────────────────────────────────────────────────

fn load_envelope(path: &PathBuf, id_attr: &[String]) -> Result<Envelope> {
    let data = std::fs::read(path)?;
    let mut envelope = Envelope::parse_bytes(&data)?;
    for attr in id_attr {
        envelope.add_id_attr(attr);
    }
    Ok(envelope)
}

fn describe(meta: &SignedPartMetadata, encoding: Encoding) -> String {
    let value = match encoding {
        Encoding::Base64 => base64::engine::general_purpose::STANDARD.encode(&meta.digest_value),
        Encoding::Hex => hex::encode(&meta.digest_value),
    };
    let method = algorithm::digest_name(&meta.digest_method).unwrap_or(meta.digest_method.as_str());
    if meta.transforms.is_empty() {
        format!("{method} {value}")
    } else {
        format!("{method} {value} ({} transforms)", meta.transforms.len())
    }
}
