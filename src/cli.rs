use std::path::{Path, PathBuf};

mod terminal;

use clap::ArgAction;
use lectern::{
    Model,
    commands::{
        ExportCommand, ListCommand, ListScope, MarkCommand, TagCommand, Target, UntagCommand,
    },
    domain::{Config, LectureName, ModuleCode, Tag, VideoName},
    storage,
};
use terminal::Colorize;
use tracing::instrument;

const CONFIG_FILE: &str = "trk.toml";

/// Parse a module code from a string, normalizing to uppercase.
///
/// This is a CLI boundary function that accepts lowercase input
/// and normalizes it before parsing.
fn parse_module_code(s: &str) -> Result<ModuleCode, String> {
    let uppercase = s.to_uppercase();
    uppercase.parse().map_err(|e| format!("{e}"))
}

fn parse_lecture_name(s: &str) -> Result<LectureName, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_video_name(s: &str) -> Result<VideoName, String> {
    s.parse().map_err(|e| format!("{e}"))
}

fn parse_tag(s: &str) -> Result<Tag, String> {
    s.parse().map_err(|e| format!("{e}"))
}

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the tracker archive
    #[arg(short, long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let data = self.data.unwrap_or_else(|| {
            Config::load(Path::new(CONFIG_FILE))
                .unwrap_or_else(|e| {
                    tracing::debug!("Failed to load config: {e}");
                    Config::default()
                })
                .data_file
        });

        self.command.run(&data)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
pub enum Command {
    /// Tag a module, lecture, or video
    Tag(TagArgs),

    /// Remove tags from a module, lecture, or video
    Untag(TagArgs),

    /// Mark a video as watched
    Mark(VideoArgs),

    /// Mark a video as not watched
    Unmark(VideoArgs),

    /// List modules, or the contents of one module or lecture
    List(ListArgs),

    /// Export the tracker to a JSON archive
    Export(ExportArgs),
}

impl Command {
    fn run(self, data: &Path) -> anyhow::Result<()> {
        let mut model = load_model(data)?;

        match self {
            Self::Tag(args) => args.run_tag(&mut model)?,
            Self::Untag(args) => args.run_untag(&mut model)?,
            Self::Mark(args) => args.run(&mut model, true)?,
            Self::Unmark(args) => args.run(&mut model, false)?,
            Self::List(args) => args.run(&model)?,
            Self::Export(args) => args.run(&model)?,
        }

        storage::save(model.tracker(), data)?;
        Ok(())
    }
}

fn load_model(data: &Path) -> anyhow::Result<Model> {
    if data.exists() {
        Ok(Model::new(storage::load(data)?))
    } else {
        tracing::debug!("No archive at {}; starting an empty tracker", data.display());
        Ok(Model::default())
    }
}

#[derive(Debug, clap::Parser)]
pub struct TagArgs {
    /// Name of the target: a module code, lecture name, or video name
    name: String,

    /// Module code context (targeting a lecture or video)
    #[arg(long = "mod", value_name = "CODE", value_parser = parse_module_code)]
    module: Option<ModuleCode>,

    /// Lecture name context (targeting a video; requires --mod)
    #[arg(long = "lec", value_name = "LECTURE", requires = "module", value_parser = parse_lecture_name)]
    lecture: Option<LectureName>,

    /// Tags, comma-separated
    #[arg(long, short, value_delimiter = ',', required = true, value_parser = parse_tag)]
    tag: Vec<Tag>,
}

impl TagArgs {
    /// Which identifying arguments were supplied decides the level being
    /// targeted.
    fn target(&self) -> anyhow::Result<Target> {
        match (&self.module, &self.lecture) {
            (None, None) => {
                let code = self.name.to_uppercase().parse::<ModuleCode>()?;
                Ok(Target::Module(code))
            }
            (Some(module), None) => {
                let lecture = self.name.parse::<LectureName>()?;
                Ok(Target::Lecture(module.clone(), lecture))
            }
            (Some(module), Some(lecture)) => {
                let video = self.name.parse::<VideoName>()?;
                Ok(Target::Video(module.clone(), lecture.clone(), video))
            }
            (None, Some(_)) => unreachable!("--lec requires --mod"),
        }
    }

    #[instrument(skip(model))]
    fn run_tag(self, model: &mut Model) -> anyhow::Result<()> {
        let target = self.target()?;
        let command = TagCommand::new(target, self.tag.into_iter().collect());
        let result = command.execute(model)?;
        println!("{}", result.message().success());
        Ok(())
    }

    #[instrument(skip(model))]
    fn run_untag(self, model: &mut Model) -> anyhow::Result<()> {
        let target = self.target()?;
        let command = UntagCommand::new(target, self.tag.into_iter().collect());
        let result = command.execute(model)?;
        println!("{}", result.message().success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct VideoArgs {
    /// Name of the video
    #[arg(value_parser = parse_video_name)]
    name: VideoName,

    /// Module code the video belongs to
    #[arg(long = "mod", value_name = "CODE", value_parser = parse_module_code)]
    module: ModuleCode,

    /// Lecture the video belongs to
    #[arg(long = "lec", value_name = "LECTURE", value_parser = parse_lecture_name)]
    lecture: LectureName,
}

impl VideoArgs {
    #[instrument(skip(model))]
    fn run(self, model: &mut Model, watched: bool) -> anyhow::Result<()> {
        let command = if watched {
            MarkCommand::watched(self.module, self.lecture, self.name)
        } else {
            MarkCommand::unwatched(self.module, self.lecture, self.name)
        };
        let result = command.execute(model)?;
        println!("{}", result.message().success());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct ListArgs {
    /// List the lectures of this module
    #[arg(long = "mod", value_name = "CODE", value_parser = parse_module_code)]
    module: Option<ModuleCode>,

    /// List the videos of this lecture (requires --mod)
    #[arg(long = "lec", value_name = "LECTURE", requires = "module", value_parser = parse_lecture_name)]
    lecture: Option<LectureName>,
}

impl ListArgs {
    fn scope(self) -> ListScope {
        match (self.module, self.lecture) {
            (None, None) => ListScope::Modules,
            (Some(module), None) => ListScope::Lectures(module),
            (Some(module), Some(lecture)) => ListScope::Videos(module, lecture),
            (None, Some(_)) => unreachable!("--lec requires --mod"),
        }
    }

    #[instrument(skip(model))]
    fn run(self, model: &Model) -> anyhow::Result<()> {
        let result = ListCommand::new(self.scope()).execute(model)?;
        println!("{}", result.message());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct ExportArgs {
    /// Destination path for the archive
    path: PathBuf,

    /// Replace the destination if it already exists
    #[arg(long)]
    overwrite: bool,
}

impl ExportArgs {
    #[instrument(skip(model))]
    fn run(self, model: &Model) -> anyhow::Result<()> {
        let result = ExportCommand::new(self.path, self.overwrite).execute(model)?;
        println!("{}", result.message().success());
        if let Some(path) = result.path() {
            println!(
                "{}",
                format!("Open it with: trk --data {} list", path.display()).dim()
            );
        }
        Ok(())
    }
}
