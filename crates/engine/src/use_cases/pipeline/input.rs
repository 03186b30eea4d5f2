//! Input stage: turn the request's source into identifiers.

use pokedex_domain::Identifier;

use super::context::InputSource;
use super::error::PipelineError;

/// Load identifiers in source order, one per line or value.
///
/// Blank entries are kept so the request count matches the input; they fail
/// later as markers. An unreadable file fails the whole run.
pub async fn load_keys(source: &InputSource) -> Result<Vec<Identifier>, PipelineError> {
    match source {
        InputSource::Inline(values) => Ok(values
            .iter()
            .map(|value| Identifier::new(value.as_str()))
            .collect()),
        InputSource::File(path) => {
            let contents = tokio::fs::read_to_string(path)
                .await
                .map_err(|e| PipelineError::input_file(path, e))?;
            Ok(contents.lines().map(Identifier::new).collect())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn inline_values_keep_order() {
        let source = InputSource::Inline(vec!["7".into(), " pikachu ".into(), "".into(), "1".into()]);

        let keys = load_keys(&source).await.unwrap();

        assert_eq!(
            keys,
            vec![
                Identifier::new("7"),
                Identifier::new("pikachu"),
                Identifier::new(""),
                Identifier::new("1")
            ]
        );
    }

    #[tokio::test]
    async fn file_is_split_into_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "bulbasaur\r\n4\n\nsquirtle\n").unwrap();

        let keys = load_keys(&InputSource::File(file.path().to_path_buf()))
            .await
            .unwrap();

        assert_eq!(
            keys,
            vec![
                Identifier::new("bulbasaur"),
                Identifier::new("4"),
                Identifier::new(""),
                Identifier::new("squirtle")
            ]
        );
        assert!(keys[2].is_blank());
    }

    #[tokio::test]
    async fn missing_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.txt");

        let err = load_keys(&InputSource::File(path.clone())).await.unwrap_err();

        assert!(matches!(err, PipelineError::InputFile { path: p, .. } if p == path));
    }
}
