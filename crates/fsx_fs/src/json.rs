use std::path::Path;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::error::{Error, Result};
use crate::primitive::FsPrimitive;

const JSON_INDENT: &[u8] = b"    ";

impl<P: FsPrimitive> crate::Fsx<P> {
    /// Reads `path` as UTF-8 and parses it as JSON.
    pub async fn load_json<T: DeserializeOwned, U: AsRef<Path>>(&self, path: U) -> Result<T> {
        let path = path.as_ref();
        let bytes = self.read_file(path).await?;
        serde_json::from_slice(&bytes).map_err(|err| Error::Json(path.to_path_buf(), err))
    }

    /// Writes `value` to `path` as JSON indented with four spaces.
    pub async fn save_json<T: Serialize + ?Sized, U: AsRef<Path>>(
        &self,
        path: U,
        value: &T,
    ) -> Result<()> {
        let path = path.as_ref();
        let mut out = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut out, PrettyFormatter::with_indent(JSON_INDENT));
        value
            .serialize(&mut serializer)
            .map_err(|err| Error::Json(path.to_path_buf(), err))?;

        self.write_file(path, out).await
    }
}
