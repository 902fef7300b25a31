use std::io::ErrorKind;
use std::path::PathBuf;

use tracing::debug;

use kernel::interface::database::{Collection, CollectionStore};
use kernel::KernelError;

use crate::database::{decode_or_default, encode};
use crate::error::ConvertError;

/// One `<collection>.json` file per collection under `root`.
#[derive(Debug, Clone)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path<C: Collection>(&self) -> PathBuf {
        self.root.join(format!("{}.json", C::KEY))
    }
}

#[async_trait::async_trait]
impl CollectionStore for FileStore {
    #[tracing::instrument(skip_all, fields(collection = C::KEY))]
    async fn load<C: Collection>(&self) -> error_stack::Result<C::Value, KernelError> {
        let path = self.path::<C>();
        match tokio::fs::read(&path).await {
            Ok(bytes) => Ok(decode_or_default::<C>(Some(bytes.as_slice()))),
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!("{} does not exist yet", path.display());
                Ok(C::Value::default())
            }
            Err(error) => Err(error).convert_error().map_err(|report| {
                report.attach_printable(format!("Failed to read {}", path.display()))
            }),
        }
    }

    /// Writes to a sibling temporary file first so readers never see a
    /// partially written collection.
    #[tracing::instrument(skip_all, fields(collection = C::KEY))]
    async fn save<C: Collection>(&self, value: &C::Value) -> error_stack::Result<(), KernelError> {
        let bytes = encode::<C>(value)?;
        let path = self.path::<C>();
        let temporary = path.with_extension("json.tmp");
        tokio::fs::create_dir_all(&self.root)
            .await
            .convert_error()
            .map_err(|report| {
                report.attach_printable(format!("Failed to create {}", self.root.display()))
            })?;
        tokio::fs::write(&temporary, bytes).await.convert_error()?;
        tokio::fs::rename(&temporary, &path).await.convert_error()?;
        Ok(())
    }
}
