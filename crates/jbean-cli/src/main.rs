use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use jbean_config::JbeanConfig;
use jbean_introspect::{BeanInfo, MethodSignature, ReservedNames};
use serde::Deserialize;

#[derive(Parser)]
#[command(name = "jbean", version, about = "JavaBean property introspection and naming utilities")]
struct Cli {
    /// Config file (defaults to `jbean.toml` in the current directory, if present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Derive bean properties from a JSON description of a type's methods
    Introspect(IntrospectArgs),
    /// Apply a naming convention transform to a single identifier
    Name(NameArgs),
}

#[derive(Args)]
struct IntrospectArgs {
    /// JSON file: `{ "type": "...", "methods": [{ "name", "return_type", "params" }] }`
    file: PathBuf,
    /// Emit JSON suitable for CI
    #[arg(long)]
    json: bool,
}

#[derive(Args)]
struct NameArgs {
    op: NameOp,
    input: String,
}

#[derive(Clone, Copy, ValueEnum)]
enum NameOp {
    Decapitalize,
    Capitalize,
    Hyphenate,
    HyphenatePreserve,
    Dehyphenate,
    Underscore,
    Package,
    Simple,
    SetterProperty,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct BeanDescription {
    #[serde(rename = "type")]
    bean_type: String,
    #[serde(default)]
    methods: Vec<MethodSignature>,
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match run(cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{:#}", err);
            2
        }
    };

    std::process::exit(exit_code);
}

fn run(cli: Cli) -> Result<i32> {
    let (config, source) = load_config(cli.config.as_deref())?;
    jbean_config::init_tracing(&config.logging);
    match &source {
        Some(path) => {
            tracing::debug!(target: "jbean.cli", path = %path.display(), "loaded config")
        }
        None => tracing::debug!(target: "jbean.cli", "no config file found; using defaults"),
    }

    match cli.command {
        Command::Introspect(args) => {
            install_reserved_names(&config);
            let description = read_description(&args.file)?;
            let info = jbean_introspect::introspect(description.bean_type, &description.methods);
            if args.json {
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                print!("{}", format_bean_info(&info));
            }
            Ok(0)
        }
        Command::Name(args) => {
            println!("{}", apply_name_op(args.op, &args.input)?);
            Ok(0)
        }
    }
}

fn load_config(path: Option<&Path>) -> Result<(JbeanConfig, Option<PathBuf>)> {
    let path = match path {
        Some(path) => Some(path.to_path_buf()),
        None => {
            let cwd = std::env::current_dir().context("resolving current directory")?;
            JbeanConfig::discover_path(cwd)
        }
    };

    let config = match &path {
        Some(path) => JbeanConfig::load_from_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => JbeanConfig::default(),
    };
    Ok((config, path))
}

fn install_reserved_names(config: &JbeanConfig) {
    let reserved = ReservedNames::new(config.introspection.normalized_reserved_names());
    if reserved.install_global().is_err() {
        tracing::warn!(
            target: "jbean.cli",
            "reserved property names were already initialized; config value ignored"
        );
    }
}

fn read_description(path: &Path) -> Result<BeanDescription> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing {}", path.display()))
}

fn apply_name_op(op: NameOp, input: &str) -> Result<String> {
    let out = match op {
        NameOp::Decapitalize => jbean_naming::decapitalize(input),
        NameOp::Capitalize => jbean_naming::capitalize(input)?,
        NameOp::Hyphenate => jbean_naming::hyphenate(input),
        NameOp::HyphenatePreserve => jbean_naming::hyphenate_with(input, false),
        NameOp::Dehyphenate => jbean_naming::dehyphenate(input),
        NameOp::Underscore => jbean_naming::underscore_separate(input),
        NameOp::Package => jbean_naming::package_name(input).to_string(),
        NameOp::Simple => jbean_naming::simple_name(input).to_string(),
        NameOp::SetterProperty => jbean_naming::property_name_for_setter(input),
    };
    Ok(out)
}

fn format_bean_info(info: &BeanInfo) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "bean: {}", info.bean_type());
    if info.is_empty() {
        let _ = writeln!(out, "  (no properties)");
        return out;
    }
    for property in info {
        let _ = write!(out, "  {}: {}", property.name(), property.property_type());
        if let Some(read) = property.read_method() {
            let _ = write!(out, " get={}", read.name);
        }
        if let Some(write) = property.write_method() {
            let _ = write!(out, " set={}", write.name);
        }
        out.push('\n');
    }
    out
}
