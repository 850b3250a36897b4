//! [`JsonTranscoder`]: the decode/encode pair behind one handle, for callers
//! that pick a transcoder at runtime.

use crate::error::Result;
use crate::{decoder, encoder};
use document_core::Document;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Stateless JSON transcoder. Cheap to construct and to share.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonTranscoder {
    pretty: bool,
}

impl JsonTranscoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit indented JSON from [`JsonTranscoder::marshal`].
    pub fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    /// See [`decoder::unmarshal`].
    pub fn unmarshal<T>(&self, data: &[u8], target: &mut T) -> Result<Document>
    where
        T: Serialize + DeserializeOwned,
    {
        decoder::unmarshal(data, target)
    }

    /// See [`encoder::marshal`].
    pub fn marshal(&self, doc: &Document) -> Result<Vec<u8>> {
        if self.pretty {
            encoder::marshal_pretty(doc)
        } else {
            encoder::marshal(doc)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn roundtrip_through_handle() {
        let coder = JsonTranscoder::new();
        let mut target: BTreeMap<String, bool> = BTreeMap::new();
        let doc = coder.unmarshal(br#"{"a":true,"b":false}"#, &mut target).unwrap();
        assert_eq!(coder.marshal(&doc).unwrap(), br#"{"a":true,"b":false}"#);
    }

    #[test]
    fn pretty_handle_indents() {
        let coder = JsonTranscoder::new().pretty(true);
        let mut target: Vec<String> = Vec::new();
        let doc = coder.unmarshal(br#"["x"]"#, &mut target).unwrap();
        assert_eq!(coder.marshal(&doc).unwrap(), b"[\n  \"x\"\n]");
    }
}
