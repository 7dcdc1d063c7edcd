//! The `alttext generate` command: one-shot generation from the terminal.

use alttext_core::{AltTextGenerator, Config, ImageInput, RawAltTextRequest};
use clap::{ArgGroup, Args};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Arguments for the `generate` command.
#[derive(Args, Debug)]
#[command(group(ArgGroup::new("source").required(true).args(["file", "url"])))]
pub struct GenerateArgs {
    /// Local image file to describe
    #[arg(long)]
    pub file: Option<PathBuf>,

    /// Remote image URL to describe
    #[arg(long)]
    pub url: Option<String>,

    /// Extra context about where the image is used
    #[arg(long)]
    pub context: Option<String>,

    /// Previous alt text to improve on
    #[arg(long)]
    pub previous: Option<String>,
}

/// Execute the generate command.
pub async fn execute(args: GenerateArgs, config: Config) -> anyhow::Result<()> {
    let raw = build_raw_request(&args)?;
    let request = raw.validate()?;

    let generator = AltTextGenerator::from_config(&config)?;
    tracing::debug!(
        kind = request.kind.as_str(),
        provider = generator.provider().name(),
        "Generating alt text"
    );

    let alt_text = generator.generate(&request).await?;
    println!("{alt_text}");
    Ok(())
}

/// Turn CLI arguments into the same wire form the HTTP endpoint accepts.
fn build_raw_request(args: &GenerateArgs) -> anyhow::Result<RawAltTextRequest> {
    let (kind, data) = match (&args.file, &args.url) {
        (Some(path), _) => ("image", file_data_uri(path)?),
        (None, Some(url)) => ("url", url.clone()),
        (None, None) => anyhow::bail!("Either --file or --url is required"),
    };

    Ok(RawAltTextRequest {
        kind: Some(Value::from(kind)),
        data: Some(Value::from(data)),
        context: args.context.clone().map(Value::from),
        previous_alt_text: args.previous.clone().map(Value::from),
    })
}

/// Read a local image and encode it as a data URI, typed by file extension.
fn file_data_uri(path: &Path) -> anyhow::Result<String> {
    let bytes = std::fs::read(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {e}", path.display()))?;
    let format = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();
    Ok(ImageInput::from_bytes(&bytes, format).data_url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use alttext_core::RequestKind;

    fn args(file: Option<PathBuf>, url: Option<&str>) -> GenerateArgs {
        GenerateArgs {
            file,
            url: url.map(String::from),
            context: Some("Team page".to_string()),
            previous: None,
        }
    }

    #[test]
    fn test_file_becomes_image_request() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("portrait.png");
        std::fs::write(&path, [0x89u8, 0x50, 0x4E, 0x47]).unwrap();

        let request = build_raw_request(&args(Some(path), None))
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(request.kind, RequestKind::Image);
        assert!(request.payload.starts_with("data:image/png;base64,"));
        assert_eq!(request.context.as_deref(), Some("Team page"));
    }

    #[test]
    fn test_url_becomes_url_request() {
        let request = build_raw_request(&args(None, Some("https://example.com/a.jpg")))
            .unwrap()
            .validate()
            .unwrap();
        assert_eq!(request.kind, RequestKind::Url);
        assert_eq!(request.payload, "https://example.com/a.jpg");
    }

    #[test]
    fn test_bad_url_is_rejected_before_any_call() {
        let err = build_raw_request(&args(None, Some("not a url")))
            .unwrap()
            .validate()
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid URL provided");
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here.png");
        assert!(build_raw_request(&args(Some(missing), None)).is_err());
    }
}
