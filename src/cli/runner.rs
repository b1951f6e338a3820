use crate::{
    cli::SetupArgs,
    error::Result,
    scaffold::{JsonReporter, LineReporter, Reporter, ScaffoldOptions, Scaffolder},
    template::naming::ProjectName,
};
use std::io::Write;
use std::path::PathBuf;

/// Main CLI runner for the setup command
pub struct Runner {
    args: SetupArgs,
}

impl Runner {
    pub fn new(args: SetupArgs) -> Self {
        Self { args }
    }

    /// Validates the name and scaffolds the project, reporting to stdout.
    pub fn run(self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        let project_dir = self.run_with(&mut out)?;

        if !self.args.json {
            let summary = if self.args.dry_run {
                format!("Dry run completed for {project_dir}; nothing was written.")
            } else {
                format!("Project generation completed successfully in {project_dir}.")
            };
            if let Err(e) = writeln!(out, "{summary}") {
                log::warn!("Failed to print summary: {e}");
            }
        }
        Ok(())
    }

    /// Runs the scaffolder with reports written to `out`, returning the
    /// project directory for display.
    pub fn run_with<W: Write>(&self, out: W) -> Result<String> {
        let name = ProjectName::validate(&self.args.name)?;
        let options = ScaffoldOptions {
            output_root: self.args.output_dir.clone(),
            dry_run: self.args.dry_run,
        };

        if options.dry_run {
            log::info!("Dry run: no directories or files will be written");
        }

        let project_dir = if self.args.json {
            scaffold_into(&name, options, &mut JsonReporter::new(out))?
        } else {
            scaffold_into(&name, options, &mut LineReporter::new(out))?
        };
        Ok(project_dir.display().to_string())
    }
}

/// Runs the scaffolder and returns the directory it generated into.
fn scaffold_into(
    name: &ProjectName,
    options: ScaffoldOptions,
    reporter: &mut dyn Reporter,
) -> Result<PathBuf> {
    let scaffolder = Scaffolder::new(name, options, reporter);
    let project_dir = scaffolder.project_dir();
    scaffolder.run()?;
    Ok(project_dir)
}

/// Main entry point for CLI execution
pub fn run(args: SetupArgs) -> Result<()> {
    let runner = Runner::new(args);
    runner.run()
}
