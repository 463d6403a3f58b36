use serde::{Deserialize, Serialize};

/// Contact details captured by the interest form, in wire shape.
///
/// Serialized as `{ "name", "phone", "pincode", "whatsappUpdates" }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Lead {
    pub name: String,
    pub phone: String,
    pub pincode: String,
    pub whatsapp_updates: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_keys_match_endpoint_contract() {
        let lead = Lead {
            name: "Asha".into(),
            phone: "9999999999".into(),
            pincode: "400001".into(),
            whatsapp_updates: true,
        };
        let value = serde_json::to_value(&lead).unwrap();
        let obj = value.as_object().unwrap();

        let mut keys: Vec<_> = obj.keys().cloned().collect();
        keys.sort();
        assert_eq!(keys, vec!["name", "phone", "pincode", "whatsappUpdates"]);
        assert_eq!(obj["whatsappUpdates"], serde_json::Value::Bool(true));
        assert_eq!(obj["pincode"], "400001");
    }

    #[test]
    fn opt_in_defaults_to_false() {
        assert!(!Lead::default().whatsapp_updates);
    }
}
