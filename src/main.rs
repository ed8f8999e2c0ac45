use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use is_terminal::IsTerminal;
use passdiff::ColorWhen;
use passdiff::areas::session::Session;
use passdiff::artifacts::render::style::StyleKind;
use passdiff::artifacts::tokens::tokenizer::TokenizerOptions;
use passdiff::commands::porcelain::compare::CompareOptions;

#[derive(Parser)]
#[command(
    name = "passdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Highlight word-level changes between two passages",
    long_about = "Compares two closely related text passages word by word and prints \
    a single merged line in which removed, added and shared words are styled differently.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct TokenizerArgs {
    #[arg(long, help = "Keep punctuation marks (and junk markers) inside tokens")]
    keep_punctuation: bool,
    #[arg(
        long,
        value_name = "CHARS",
        help = "Punctuation marks that are never stripped [default: -$/]"
    )]
    exempt: Option<String>,
    #[arg(long, value_name = "STR", help = "Additional junk substring to strip")]
    junk: Vec<String>,
    #[arg(long, help = "Do not strip the built-in junk markers")]
    no_default_junk: bool,
}

impl TokenizerArgs {
    fn options(&self) -> TokenizerOptions {
        let defaults = TokenizerOptions::default();
        let exempt_punctuation = match &self.exempt {
            Some(chars) => chars.chars().collect(),
            None => defaults.exempt_punctuation,
        };
        let mut junk = if self.no_default_junk {
            Vec::new()
        } else {
            defaults.junk
        };
        junk.extend(self.junk.iter().cloned());

        TokenizerOptions::new(!self.keep_punctuation, exempt_punctuation, junk)
    }
}

#[derive(Args)]
struct StyleArgs {
    #[arg(
        short,
        long,
        default_value = "ansi",
        help = "Output style: ansi, markers, html or plain"
    )]
    style: String,
    #[arg(long, value_enum, default_value_t = ColorWhen::Auto, help = "When to use ANSI colours")]
    color: ColorWhen,
}

impl StyleArgs {
    fn style(&self) -> Result<StyleKind> {
        let color = match self.color {
            ColorWhen::Auto if std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty()) => {
                ColorWhen::Never
            }
            color => color,
        };

        Ok(StyleKind::try_parse(&self.style)?.resolve(color, std::io::stdout().is_terminal()))
    }
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "compare",
        about = "Show the changes between two passages",
        long_about = "This command tokenizes both passages, aligns them and prints one line \
        with deleted, inserted and shared words styled. Use '-' to read one passage from stdin."
    )]
    Compare {
        #[arg(index = 1, help = "The old passage")]
        old: String,
        #[arg(index = 2, help = "The new passage")]
        new: String,
        #[command(flatten)]
        tokenizer: TokenizerArgs,
        #[command(flatten)]
        style: StyleArgs,
    },
    #[command(
        name = "tokenize",
        about = "Print the tokens of a passage",
        long_about = "This command prints the normalized tokens of a passage, one per line."
    )]
    Tokenize {
        #[arg(index = 1, help = "The passage, or '-' for stdin")]
        file: String,
        #[command(flatten)]
        tokenizer: TokenizerArgs,
    },
    #[command(name = "demo", about = "Compare two built-in sample passages")]
    Demo {
        #[command(flatten)]
        style: StyleArgs,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let pwd = std::env::current_dir()?;
    let session = Session::new(&pwd, Box::new(std::io::stdout()))?;

    match &cli.command {
        Commands::Compare {
            old,
            new,
            tokenizer,
            style,
        } => {
            let opts = CompareOptions::new(tokenizer.options(), style.style()?);
            session.compare(old, new, &opts)?
        }
        Commands::Tokenize { file, tokenizer } => session.tokenize(file, &tokenizer.options())?,
        Commands::Demo { style } => session.demo(style.style()?)?,
    }

    Ok(())
}
