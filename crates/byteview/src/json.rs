//! Structured-serialization interop: the `{"type": "Buffer", "data": [...]}`
//! JSON shape.

use serde_json::{json, Value};

use crate::{BufError, ByteBuf};

impl ByteBuf {
    /// Serializes the view as `{"type": "Buffer", "data": [...]}`.
    ///
    /// # Example
    ///
    /// ```
    /// use byteview::ByteBuf;
    /// use serde_json::json;
    ///
    /// let buf = ByteBuf::from_slice(&[1, 2, 3, 4]);
    /// assert_eq!(buf.to_json(), json!({"type": "Buffer", "data": [1, 2, 3, 4]}));
    /// ```
    pub fn to_json(&self) -> Value {
        let data: Vec<Value> = self.as_bytes().iter().map(|&b| Value::from(b)).collect();
        json!({ "type": "Buffer", "data": data })
    }

    /// Reconstructs a buffer from the [`to_json`](ByteBuf::to_json) shape.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` when the value is not an object with
    /// `"type": "Buffer"` and a `"data"` array of integers in 0–255.
    pub fn from_json(value: &Value) -> Result<ByteBuf, BufError> {
        let obj = value
            .as_object()
            .ok_or(BufError::InvalidArgument("expected a JSON object"))?;
        if obj.get("type").and_then(Value::as_str) != Some("Buffer") {
            return Err(BufError::InvalidArgument("expected \"type\": \"Buffer\""));
        }
        let data = obj
            .get("data")
            .and_then(Value::as_array)
            .ok_or(BufError::InvalidArgument("expected a \"data\" array"))?;
        let mut bytes = Vec::with_capacity(data.len());
        for item in data {
            let byte = item
                .as_u64()
                .filter(|&n| n <= 0xFF)
                .ok_or(BufError::InvalidArgument("byte value outside 0-255"))?;
            bytes.push(byte as u8);
        }
        Ok(ByteBuf::from_vec(bytes))
    }
}
