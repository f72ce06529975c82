use anyhow::{Context, Result};
use imgref::{ImageReference, Mode, Parser};
use std::io::Write;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Strictness {
    /// Reject anything outside the reference grammar
    #[default]
    Strict,
    /// Best-effort split that only rejects empty input
    Rough,
}

impl From<Strictness> for Mode {
    fn from(strictness: Strictness) -> Self {
        match strictness {
            Strictness::Strict => Mode::Strict,
            Strictness::Rough => Mode::Rough,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Format {
    #[default]
    Text,
    Json,
}

#[derive(clap::Parser)]
pub struct Cli {
    /// Image references (e.g., quay.io/namespace/repo:tag@sha256:...)
    #[arg(required = true)]
    pub images: Vec<String>,

    /// How strictly references are checked
    #[arg(long, value_enum, env = "IMGREF_MODE", default_value_t = Strictness::Strict)]
    pub mode: Strictness,

    /// Output format
    #[arg(long, value_enum, env = "IMGREF_FORMAT", default_value_t = Format::Text)]
    pub format: Format,
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        self.write(&mut stdout.lock())
    }

    fn write(&self, out: &mut impl Write) -> Result<()> {
        let parser = Parser::new(self.mode.into());

        for image in &self.images {
            let reference = parser
                .parse(image)
                .with_context(|| format!("Failed to parse image reference `{image}`"))?;

            let rendered = self.render(&reference)?;
            writeln!(out, "{rendered}")?;
        }

        Ok(())
    }

    fn render(&self, reference: &ImageReference) -> Result<String> {
        match self.format {
            Format::Json => Ok(serde_json::to_string(reference)?),
            Format::Text => Ok(reference
                .fields()
                .iter()
                .map(|(field, value)| format!("{field}: {value}"))
                .collect::<Vec<_>>()
                .join("\n")),
        }
    }
}
