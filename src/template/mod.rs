//! Template catalog for generated mruby projects
//!
//! This module contains the pure, I/O-free side of scaffolding:
//! - `naming`: The project name and its derived identifier form
//! - `manifest`: The ordered list of files a project is made of
//!
//! Every template body is a static asset from the `templates/` directory.
//! Rendering only replaces the `{{ name }}` and `{{ identifier }}`
//! placeholders, so it cannot fail and always yields the same bytes for
//! the same name.

pub mod manifest;
pub mod naming;

use crate::constants::{IDENTIFIER_PLACEHOLDER, NAME_PLACEHOLDER};
use naming::ProjectName;

const MRBGEM_RAKE: &str = include_str!("../../templates/mrbgem.rake.tmpl");
const BUILD_CONFIG: &str = include_str!("../../templates/build_config.rb.tmpl");
const RAKEFILE: &str = include_str!("../../templates/Rakefile.tmpl");
const DOCKERFILE: &str = include_str!("../../templates/Dockerfile.tmpl");
const DOCKER_COMPOSE: &str = include_str!("../../templates/docker-compose.yml.tmpl");
const TOOL: &str = include_str!("../../templates/tool.c.tmpl");
const MRBLIB: &str = include_str!("../../templates/mrblib.rb.tmpl");
const BINTEST: &str = include_str!("../../templates/bintest.rb.tmpl");
const TEST: &str = include_str!("../../templates/test.rb.tmpl");

/// One generated file of an mruby CLI project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Template {
    /// Gem specification: metadata plus the `mruby-print`/`mruby-mtest` dependencies.
    MrbgemRake,
    /// Host build and the five cross-compilation targets.
    BuildConfig,
    /// compile/test/clean tasks, driven by `APP_NAME`, `APP_ROOT` and `MRUBY_ROOT`.
    Rakefile,
    Dockerfile,
    /// One service per Rakefile task, plus a shell.
    DockerCompose,
    /// Native entry point that calls `__main__(ARGV)`.
    Tool,
    /// Ruby side of the entry point.
    Mrblib,
    /// Integration test run against the built binary.
    Bintest,
    /// mtest unit test, named after the identifier form.
    Test,
}

impl Template {
    /// Every template in manifest order.
    pub const ALL: [Template; 9] = [
        Template::MrbgemRake,
        Template::BuildConfig,
        Template::Rakefile,
        Template::Dockerfile,
        Template::DockerCompose,
        Template::Tool,
        Template::Mrblib,
        Template::Bintest,
        Template::Test,
    ];

    /// The raw asset, placeholders included.
    pub fn source(&self) -> &'static str {
        match self {
            Template::MrbgemRake => MRBGEM_RAKE,
            Template::BuildConfig => BUILD_CONFIG,
            Template::Rakefile => RAKEFILE,
            Template::Dockerfile => DOCKERFILE,
            Template::DockerCompose => DOCKER_COMPOSE,
            Template::Tool => TOOL,
            Template::Mrblib => MRBLIB,
            Template::Bintest => BINTEST,
            Template::Test => TEST,
        }
    }

    /// Output path relative to the project directory, `/`-separated.
    ///
    /// # Arguments
    /// * `name` - The project name, embedded in some of the paths
    ///
    /// # Returns
    /// * `String` - e.g. `tools/widget/widget.c`
    pub fn path(&self, name: &ProjectName) -> String {
        match self {
            Template::MrbgemRake => "mrbgem.rake".to_string(),
            Template::BuildConfig => "build_config.rb".to_string(),
            Template::Rakefile => "Rakefile".to_string(),
            Template::Dockerfile => "Dockerfile".to_string(),
            Template::DockerCompose => "docker-compose.yml".to_string(),
            Template::Tool => format!("tools/{name}/{name}.c"),
            Template::Mrblib => format!("mrblib/{name}.rb"),
            Template::Bintest => format!("bintest/{name}.rb"),
            Template::Test => format!("test/test_{name}.rb"),
        }
    }

    /// Renders the template for `name`.
    pub fn render(&self, name: &ProjectName) -> String {
        render_placeholders(self.source(), name)
    }
}

/// Substitutes both placeholders in `source` in a single left-to-right
/// pass. Inserted values are never scanned again, so a name that itself
/// contains placeholder text is written out verbatim.
pub fn render_placeholders(source: &str, name: &ProjectName) -> String {
    let substitutions = [
        (NAME_PLACEHOLDER, name.as_str()),
        (IDENTIFIER_PLACEHOLDER, name.identifier()),
    ];

    let mut rendered = String::with_capacity(source.len());
    let mut rest = source;
    loop {
        let next = substitutions
            .iter()
            .filter_map(|(placeholder, value)| {
                rest.find(placeholder).map(|idx| (idx, placeholder.len(), *value))
            })
            .min_by_key(|(idx, _, _)| *idx);

        match next {
            Some((idx, len, value)) => {
                rendered.push_str(&rest[..idx]);
                rendered.push_str(value);
                rest = &rest[idx + len..];
            }
            None => {
                rendered.push_str(rest);
                return rendered;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_embed_the_verbatim_name() {
        let name = ProjectName::new("my_tool");
        assert_eq!(Template::Tool.path(&name), "tools/my_tool/my_tool.c");
        assert_eq!(Template::Mrblib.path(&name), "mrblib/my_tool.rb");
        assert_eq!(Template::Bintest.path(&name), "bintest/my_tool.rb");
        assert_eq!(Template::Test.path(&name), "test/test_my_tool.rb");
        assert_eq!(Template::Rakefile.path(&name), "Rakefile");
    }

    #[test]
    fn mrbgem_uses_name_for_summary_and_bins() {
        let rendered = Template::MrbgemRake.render(&ProjectName::new("my_tool"));
        assert!(rendered.starts_with("MRuby::Gem::Specification.new('my_tool') do |spec|"));
        assert!(rendered.contains("spec.summary = 'my_tool'"));
        assert!(rendered.contains("spec.bins    = ['my_tool']"));
        assert!(rendered.contains("spec.add_dependency 'mruby-print', :core => 'mruby-print'"));
        assert!(rendered.contains("spec.add_dependency 'mruby-mtest', :mgem => 'mruby-mtest'"));
    }

    #[test]
    fn unit_test_uses_identifier_form() {
        let rendered = Template::Test.render(&ProjectName::new("my_tool"));
        assert!(rendered.starts_with("class TestMyTool < MTest::Unit::TestCase\n"));
        assert!(!rendered.contains("my_tool"));
    }

    #[test]
    fn build_config_declares_cross_targets() {
        let rendered = Template::BuildConfig.render(&ProjectName::new("widget"));
        assert_eq!(rendered.matches("MRuby::Build.new").count(), 1);
        assert_eq!(rendered.matches("MRuby::CrossBuild.new(").count(), 5);
        for target in [
            "i686-pc-linux-gnu",
            "x86_64-apple-darwin14",
            "i386-apple-darwin14",
            "x86_64-w64-mingw32",
            "i686-w64-mingw32",
        ] {
            assert!(rendered.contains(&format!("MRuby::CrossBuild.new('{target}')")));
        }
    }

    #[test]
    fn rakefile_keeps_ruby_interpolation() {
        let rendered = Template::Rakefile.render(&ProjectName::new("widget"));
        assert!(rendered.contains("APP_NAME=ENV[\"APP_NAME\"] || \"widget\""));
        assert!(rendered.contains("APP_ROOT=ENV[\"APP_ROOT\"] || Dir.pwd"));
        assert!(rendered.contains("ENV[\"MRUBY_ROOT\"] || \"#{APP_ROOT}/mruby\""));
        assert!(rendered.contains("task :compile => [:mruby, :all] do"));
        assert!(rendered.contains("task :clean do"));
    }

    #[test]
    fn compose_maps_services_to_tasks() {
        let rendered = Template::DockerCompose.render(&ProjectName::new("widget"));
        for command in [
            "rake compile",
            "rake test",
            "rake test:bintest",
            "rake test:mtest",
            "rake clean",
            "bash",
        ] {
            assert!(rendered.contains(&format!("command: {command}\n")));
        }
    }

    #[test]
    fn entry_point_calls_main() {
        let tool = Template::Tool.render(&ProjectName::new("widget"));
        assert!(tool.contains("mrb_funcall(mrb, mrb_top_self(mrb), \"__main__\", 1, ARGV);"));
        let mrblib = Template::Mrblib.render(&ProjectName::new("widget"));
        assert_eq!(mrblib, "def __main__(argv)\n  puts \"Hello World\"\nend\n");
    }

    #[test]
    fn bintest_points_at_built_binary() {
        let rendered = Template::Bintest.render(&ProjectName::new("widget"));
        assert!(rendered.contains("\"../mruby/bin/widget\""));
        assert!(rendered.contains("assert_include output, \"Hello World\""));
    }

    #[test]
    fn rendering_leaves_no_placeholders() {
        let name = ProjectName::new("my_tool");
        for template in Template::ALL {
            let rendered = template.render(&name);
            assert!(!rendered.contains("{{"), "{template:?} kept a placeholder");
            assert!(rendered.ends_with('\n'), "{template:?} lacks a final newline");
        }
    }

    #[test]
    fn name_with_placeholder_text_is_inserted_verbatim() {
        let name = ProjectName::new("x{{ identifier }}");
        let rendered = Template::MrbgemRake.render(&name);
        assert!(rendered.contains("spec.summary = 'x{{ identifier }}'"), "{rendered}");
    }

    #[test]
    fn placeholders_are_replaced_left_to_right() {
        let name = ProjectName::new("my_tool");
        assert_eq!(
            render_placeholders("{{ identifier }}:{{ name }}:{{ name }}", &name),
            "MyTool:my_tool:my_tool"
        );
        assert_eq!(render_placeholders("no placeholders", &name), "no placeholders");
    }

    #[test]
    fn rendering_is_deterministic() {
        let name = ProjectName::new("widget");
        for template in Template::ALL {
            assert_eq!(template.render(&name), template.render(&name));
        }
    }
}
