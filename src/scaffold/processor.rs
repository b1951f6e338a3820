use std::path::PathBuf;

use crate::{
    constants::PATH_SEPARATOR,
    error::Result,
    ioutils::write_file,
    template::{
        manifest::{parent_dir, Manifest},
        naming::ProjectName,
    },
};

use super::{materializer::DirectoryMaterializer, operation::ActionRecord, report::Reporter};

/// Where and how a project is generated.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Directory the project directory is created in.
    pub output_root: PathBuf,
    /// Report every action without touching the filesystem.
    pub dry_run: bool,
}

impl Default for ScaffoldOptions {
    fn default() -> Self {
        Self { output_root: PathBuf::from("."), dry_run: false }
    }
}

/// Applies the project manifest under `output_root/<name>`.
///
/// The run is a single sequential pass: the project directory first, then
/// every manifest entry in order, materializing its parent directories just
/// before the file is written. Files are always overwritten. The first
/// filesystem error aborts the run; nothing already written is rolled back.
pub struct Scaffolder<'a> {
    name: &'a ProjectName,
    options: ScaffoldOptions,
    reporter: &'a mut dyn Reporter,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        name: &'a ProjectName,
        options: ScaffoldOptions,
        reporter: &'a mut dyn Reporter,
    ) -> Self {
        Self { name, options, reporter }
    }

    /// The directory the project is generated into.
    pub fn project_dir(&self) -> PathBuf {
        self.options.output_root.join(self.name.as_str())
    }

    pub fn run(self) -> Result<()> {
        let Scaffolder { name, options, reporter } = self;
        let manifest = Manifest::for_project(name);
        let mut materializer =
            DirectoryMaterializer::new(options.output_root, options.dry_run);

        log::info!(
            "Scaffolding '{}' into '{}'",
            name,
            materializer.resolve(name.as_str()).display()
        );

        materializer.materialize(name.as_str(), reporter)?;

        for (path, template) in manifest.iter() {
            let relative = format!("{}{}{}", name.as_str(), PATH_SEPARATOR, path);

            if let Some(parent) = parent_dir(&relative) {
                materializer.materialize(parent, reporter)?;
            }

            let target = materializer.resolve(&relative);
            let content = template.render(name);
            if options.dry_run {
                log::debug!("Would write {:?} to '{}'", template, target.display());
            } else {
                log::debug!("Writing {:?} to '{}'", template, target.display());
                write_file(&content, &target)?;
            }
            reporter.report(&ActionRecord::FileCreated(relative));
        }

        log::info!("Scaffolded {} files for '{}'", manifest.len(), name);
        Ok(())
    }
}

/// Scaffolds `name` into the current directory.
pub fn scaffold(name: &ProjectName, reporter: &mut dyn Reporter) -> Result<()> {
    Scaffolder::new(name, ScaffoldOptions::default(), reporter).run()
}
