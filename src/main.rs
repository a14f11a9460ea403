use std::io::{self, Read, Write};
use std::path::PathBuf;

use accentor::{DictionaryPaths, Lang, MappingOverride, Restorer, lang::from_code, remove_diacritics};
use anyhow::{Context, anyhow};
use gumdrop::Options;

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print help message")]
    help: bool,

    #[options(command)]
    command: Option<Command>,
}

#[derive(Debug, Options)]
enum Command {
    #[options(help = "restore diacritics using a word-frequency dictionary")]
    Restore(RestoreArgs),

    #[options(help = "remove diacritics (no dictionary needed)")]
    Strip(StripArgs),
}

#[derive(Debug, Options)]
struct RestoreArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "language code, e.g. HUN or hu", required)]
    lang: String,

    #[options(help = "tab-separated <word>\\t<frequency> file", required)]
    dictionary: PathBuf,

    #[options(help = "reattach suffixes of inflected forms")]
    suffix: bool,

    #[options(help = "shortest stem tried by suffix matching", default = "4")]
    min_stem: usize,

    #[options(help = "word to leave unchanged (repeatable)")]
    ignore: Vec<String>,

    #[options(no_short, long = "map", help = "extra mapping as LETTER=ASCII (repeatable)")]
    mappings: Vec<String>,

    #[options(free, help = "text to restore; stdin when absent")]
    inputs: Vec<String>,
}

#[derive(Debug, Options)]
struct StripArgs {
    #[options(help = "print help message")]
    help: bool,

    #[options(help = "language whose mapping table to apply", default = "ENG")]
    lang: String,

    #[options(free, help = "text to strip; stdin when absent")]
    inputs: Vec<String>,
}

fn read_input(inputs: Vec<String>) -> anyhow::Result<String> {
    if !inputs.is_empty() {
        return Ok(inputs.join(" "));
    }
    let mut buffer = String::new();
    io::stdin()
        .read_to_string(&mut buffer)
        .context("reading stdin")?;
    Ok(buffer)
}

fn parse_lang(code: &str) -> anyhow::Result<Lang> {
    from_code(code).ok_or_else(|| anyhow!("unknown language code `{code}`"))
}

fn parse_mapping(arg: &str) -> anyhow::Result<MappingOverride> {
    let (key, value) = arg
        .split_once('=')
        .ok_or_else(|| anyhow!("mapping `{arg}` is not LETTER=ASCII"))?;
    Ok(MappingOverride::parse(key, value)?)
}

fn restore(args: RestoreArgs) -> anyhow::Result<()> {
    let lang = parse_lang(&args.lang)?;
    let mut builder = Restorer::builder()
        .lang(lang)
        .source(DictionaryPaths::new().with(lang, &args.dictionary))
        .suffix_matching(args.suffix)
        .min_stem_len(args.min_stem)
        .ignore_words(args.ignore);
    for arg in &args.mappings {
        builder = builder.mapping_override(parse_mapping(arg)?);
    }

    let mut restorer = builder.build();
    restorer
        .initialize()
        .with_context(|| format!("loading {}", args.dictionary.display()))?;

    let text = read_input(args.inputs)?;
    let restored = restorer.restore(&text)?;
    io::stdout().write_all(restored.as_bytes())?;
    if !restored.ends_with('\n') {
        println!();
    }
    log::debug!("{restorer:?}");
    Ok(())
}

fn strip(args: StripArgs) -> anyhow::Result<()> {
    let lang = parse_lang(&args.lang)?;
    let text = read_input(args.inputs)?;
    let stripped = remove_diacritics(&text, lang);
    io::stdout().write_all(stripped.as_bytes())?;
    if !stripped.ends_with('\n') {
        println!();
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();

    let args = Args::parse_args_default_or_exit();

    match args.command {
        None => Ok(()),
        Some(Command::Restore(args)) => restore(args),
        Some(Command::Strip(args)) => strip(args),
    }
}
