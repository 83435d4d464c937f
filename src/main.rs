// Mon Jan 19 2026 - Alex

use anyhow::{bail, Context, Result};
use clap::{Args as ClapArgs, Parser, Subcommand};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use log::LevelFilter;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, Instant};
use uobject_reflector::{
    config::Config,
    facade::ObjectScope,
    memory::{Address, MemoryReader, MmapMemory},
    objects::{NameTable, ObjectTable, StaticNameTable},
    schema::{SerializableLayout, StructDefinition, TypeRegistry},
    session::Session,
    utils::{self, LoggingUtils},
};

#[derive(Parser, Debug)]
#[command(author = "Alex")]
#[command(version = "1.0.0")]
#[command(about = "Schema-driven UObject layout resolver and object table walker", long_about = None)]
struct Args {
    /// JSON config file; command-line values take precedence.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Resolve struct layouts from schema files
    Layout(LayoutArgs),
    /// Walk the global object table in a raw memory image
    Walk(WalkArgs),
}

#[derive(ClapArgs, Debug)]
struct SchemaArgs {
    /// Schema files; later files override earlier ones
    #[arg(short, long = "schema")]
    schemas: Vec<PathBuf>,

    /// Pointer size of the target process
    #[arg(long, default_value_t = 64, value_parser = parse_target_bits)]
    target_bits: usize,
}

#[derive(ClapArgs, Debug)]
struct LayoutArgs {
    #[command(flatten)]
    schema: SchemaArgs,

    /// Only print this struct
    #[arg(long = "struct")]
    struct_name: Option<String>,

    /// Write the layouts as JSON instead of printing them
    #[arg(long)]
    json: Option<PathBuf>,
}

#[derive(ClapArgs, Debug)]
struct WalkArgs {
    #[command(flatten)]
    schema: SchemaArgs,

    /// Raw memory image of the target
    #[arg(long)]
    image: PathBuf,

    /// Address the image was dumped from
    #[arg(long, value_parser = parse_address)]
    base: Address,

    /// Address of the global object table
    #[arg(long, value_parser = parse_address)]
    gobjects: Address,

    /// Name dump, one name per line
    #[arg(long)]
    names: PathBuf,

    /// Print at most this many objects
    #[arg(long)]
    limit: Option<usize>,

    #[arg(long)]
    no_progress: bool,
}

fn parse_address(text: &str) -> Result<Address, String> {
    Address::parse(text).ok_or_else(|| format!("invalid address `{}`", text))
}

fn parse_target_bits(text: &str) -> Result<usize, String> {
    match text {
        "32" => Ok(32),
        "64" => Ok(64),
        _ => Err(format!("target bits must be 32 or 64, got `{}`", text)),
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        eprintln!("{} {:#}", "[!]".red(), e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::load(path).map_err(anyhow::Error::msg)?,
        None => Config::default(),
    };

    let mut level = LoggingUtils::level_from_verbosity(args.verbose);
    if config.enable_verbose_output && level < LevelFilter::Info {
        level = LevelFilter::Info;
    }
    utils::init_from_env(level);

    let schema = match &args.command {
        Command::Layout(layout) => &layout.schema,
        Command::Walk(walk) => &walk.schema,
    };
    config.schema_files.extend(schema.schemas.iter().cloned());
    config.validate().map_err(anyhow::Error::msg)?;

    let registry = Arc::new(load_registry(&config.schema_files)?);

    match args.command {
        Command::Layout(layout) => run_layout(&registry, &layout),
        Command::Walk(walk) => run_walk(&config, registry, &walk),
    }
}

fn load_registry(files: &[PathBuf]) -> Result<TypeRegistry> {
    let _timer = utils::scoped_timer("schema load");
    let registry = TypeRegistry::new();
    for (index, path) in files.iter().enumerate() {
        let count = registry
            .load_file(path, index > 0)
            .with_context(|| format!("Failed to load schema {}", path.display()))?;
        println!("{} Loaded {} structs from {}", "[+]".green(), count, path.display());
    }
    Ok(registry)
}

fn run_layout(registry: &TypeRegistry, args: &LayoutArgs) -> Result<()> {
    let native = registry.pointer_width();
    let target = args.schema.target_bits / 8;

    let definitions: Vec<Arc<StructDefinition>> = match &args.struct_name {
        Some(name) => vec![registry
            .resolve(name, false)
            .with_context(|| format!("Failed to resolve `{}`", name))?],
        None => registry.definitions(),
    };

    if let Some(path) = &args.json {
        let layouts: Vec<SerializableLayout> = definitions
            .iter()
            .map(|definition| SerializableLayout::for_target(definition, native, target))
            .collect();
        save_json(&layouts, path)?;
        println!("{} Layouts saved to: {}", "[+]".green(), path.display());
        return Ok(());
    }

    for definition in &definitions {
        print_layout(definition, native, target);
    }
    Ok(())
}

fn print_layout(definition: &StructDefinition, native: usize, target: usize) {
    let header = match definition.super_name() {
        Some(super_name) => format!("{} : {}", definition.name(), super_name),
        None => definition.name().to_string(),
    };
    println!();
    println!("{}", header.cyan().bold());
    println!("{}", "-".repeat(40).cyan());
    for field in definition.fields() {
        println!(
            "  0x{:04x}  {:<28} {:<20} {}",
            field.offset(),
            field.name(),
            field.type_name().yellow(),
            field.size()
        );
    }
    println!(
        "  size 0x{:x}, target size 0x{:x}",
        definition.size(),
        definition.foreign_size(native, target)
    );
}

fn run_walk(config: &Config, registry: Arc<TypeRegistry>, args: &WalkArgs) -> Result<()> {
    let start_time = Instant::now();
    let width = args.schema.target_bits / 8;

    let image = MmapMemory::from_file(&args.image, args.base, width)
        .with_context(|| format!("Failed to map image {}", args.image.display()))?;
    println!(
        "{} Mapped {} at {}",
        "[+]".green(),
        args.image.display(),
        image.base_address()
    );

    let names = StaticNameTable::from_file(&args.names)
        .with_context(|| format!("Failed to read names {}", args.names.display()))?;
    if names.count() == 0 {
        bail!("Name file {} is empty", args.names.display());
    }

    let memory: Arc<dyn MemoryReader> = Arc::new(image);
    let session = Session::new(memory, registry, Arc::new(names)).with_walker(config.walker.clone());

    let spinner = (!args.no_progress).then(|| {
        let pb = ProgressBar::new_spinner();
        pb.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} [{elapsed_precise}] {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        pb.set_message(format!("Walking object table at {}", args.gobjects));
        pb.enable_steady_tick(Duration::from_millis(100));
        pb
    });

    let table = ObjectTable::build(&session, args.gobjects)
        .with_context(|| format!("Failed to walk object table at {}", args.gobjects));

    if let Some(pb) = &spinner {
        pb.finish_and_clear();
    }
    let table = table?;

    if let Some(info) = table.info() {
        println!(
            "{} {} layout, {}, {}",
            "[+]".green(),
            info.layout,
            if info.is_chunked { "chunked" } else { "flat" },
            utils::pluralize(info.chunk_count(), "chunk", "chunks")
        );
    }

    let scope = ObjectScope::new(&session, &table);
    let limit = args.limit.unwrap_or(usize::MAX);
    for object in scope.objects().take(limit) {
        println!(
            "  [{:>6}] {} {}",
            object.index(),
            object.address().to_string().dimmed(),
            object.full_name()
        );
    }

    println!();
    println!(
        "{} {} in {}",
        "[+]".green(),
        utils::pluralize(table.len(), "object", "objects"),
        utils::format_duration(start_time.elapsed())
    );
    Ok(())
}

fn save_json<T: serde::Serialize>(value: &T, path: &Path) -> Result<()> {
    let text = serde_json::to_string_pretty(value)?;
    fs::write(path, text).with_context(|| format!("Failed to write {}", path.display()))
}
