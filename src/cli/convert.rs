//! Convert command implementation.

use std::fs;
use std::io::{self, Write};

use anyhow::{Context, Result};

use super::ConvertArgs;
use super::common::read_post;
use crate::config::PostConfig;
use crate::math::MathMLRenderer;
use crate::{debug, log, pipeline};

/// Render the page for `args.input` without writing it anywhere.
pub fn render_post(args: &ConvertArgs, config: &PostConfig) -> Result<String> {
    let source = read_post(&args.input)?;
    let options = config.markdown_options()?;
    let strict = config.strict_math(args);
    let renderer = MathMLRenderer::new(strict);
    if let Some(path) = &config.config_path {
        debug!("config"; "using {}", path.display());
    }
    debug!("convert"; "strict math: {}, options: {:?}", strict, options);

    let html = if args.fragment {
        pipeline::convert_fragment(&source, &options, &renderer)
    } else {
        pipeline::convert(&source, &config.page_head(args), &options, &renderer)
    };
    html.with_context(|| format!("failed to convert {}", args.input.display()))
}

/// Convert a post and write the page to `--output` or stdout.
///
/// Nothing is written unless the whole conversion succeeds.
pub fn convert_post(args: &ConvertArgs, config: &PostConfig) -> Result<()> {
    let html = render_post(args, config)?;

    match &args.output {
        Some(path) => {
            fs::write(path, format!("{html}\n"))
                .with_context(|| format!("failed to write {}", path.display()))?;
            log!("convert"; "{} -> {}", args.input.display(), path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{html}")?;
            stdout.flush()?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use std::path::Path;
    use tempfile::TempDir;

    fn args_for(input: &Path) -> ConvertArgs {
        ConvertArgs {
            input: input.to_path_buf(),
            ..ConvertArgs::default()
        }
    }

    fn write_post(dir: &TempDir, content: &str) -> std::path::PathBuf {
        let path = dir.path().join("post.md");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_render_post() {
        let dir = TempDir::new().unwrap();
        let input = write_post(&dir, "# Hello\n\n$$a+b$$\n");
        let args = ConvertArgs {
            description: Some("desc".into()),
            styles: vec!["style.css".into()],
            ..args_for(&input)
        };

        let html = render_post(&args, &PostConfig::default()).unwrap();
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains(r#"<meta name="description" content="desc">"#));
        assert!(html.contains(r#"href="style.css""#));
        assert!(html.contains(r#"<span class="math display">"#));
    }

    #[test]
    fn test_missing_input_downcasts() {
        let dir = TempDir::new().unwrap();
        let args = args_for(&dir.path().join("nope.md"));

        let err = render_post(&args, &PostConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::FileNotFound(_))
        ));
    }

    #[test]
    fn test_strict_math_failure_writes_nothing() {
        let dir = TempDir::new().unwrap();
        let input = write_post(&dir, "# T\n\n$\\frac{1}{2$\n");
        let output = dir.path().join("out.html");
        let args = ConvertArgs {
            output: Some(output.clone()),
            ..args_for(&input)
        };

        let err = convert_post(&args, &PostConfig::default()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<Error>(),
            Some(Error::MathSyntax { .. })
        ));
        assert!(!output.exists());
    }

    #[test]
    fn test_lenient_math() {
        let dir = TempDir::new().unwrap();
        let input = write_post(&dir, "# T\n\n$\\frac{1}{2$\n");
        let args = ConvertArgs {
            no_strict_math: true,
            ..args_for(&input)
        };

        let html = render_post(&args, &PostConfig::default()).unwrap();
        assert!(html.contains("math-error"));
    }

    #[test]
    fn test_fragment_skips_page_and_title() {
        let dir = TempDir::new().unwrap();
        let input = write_post(&dir, "no heading, just $x$\n");
        let args = ConvertArgs {
            fragment: true,
            ..args_for(&input)
        };

        let html = render_post(&args, &PostConfig::default()).unwrap();
        assert!(html.starts_with("<p>"));
        assert!(!html.contains("<html"));
        assert!(html.contains(r#"<span class="math inline">"#));
    }

    #[test]
    fn test_write_output_file() {
        let dir = TempDir::new().unwrap();
        let input = write_post(&dir, "# Out\n\ntext\n");
        let output = dir.path().join("out.html");
        let args = ConvertArgs {
            output: Some(output.clone()),
            ..args_for(&input)
        };

        convert_post(&args, &PostConfig::default()).unwrap();
        let written = fs::read_to_string(&output).unwrap();
        assert!(written.starts_with("<!DOCTYPE html>"));
        assert!(written.ends_with("</html>\n"));
    }
}
