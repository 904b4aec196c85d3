//! Sequence encodings for maps whose keys are not strings.

/// `OrdMap<K, V>` as a sequence of `(key, value)` pairs.
pub mod pairs {
    use im::OrdMap;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    pub fn serialize<S, K, V>(map: &OrdMap<K, V>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
        K: Serialize + Ord,
        V: Serialize,
    {
        serializer.collect_seq(map.iter())
    }

    pub fn deserialize<'de, D, K, V>(deserializer: D) -> Result<OrdMap<K, V>, D::Error>
    where
        D: Deserializer<'de>,
        K: Deserialize<'de> + Ord + Clone,
        V: Deserialize<'de> + Clone,
    {
        let pairs: Vec<(K, V)> = Vec::deserialize(deserializer)?;
        Ok(pairs.into_iter().collect())
    }
}

/// `OrdMap<EdgeKey, Edge>` as a sequence of edges; each edge carries its key.
pub mod values {
    use crate::network::graph::{Edge, EdgeKey};
    use im::OrdMap;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(map: &OrdMap<EdgeKey, Edge>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_seq(map.values())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<OrdMap<EdgeKey, Edge>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let edges: Vec<Edge> = Vec::deserialize(deserializer)?;
        Ok(edges
            .into_iter()
            .map(|edge| (edge.key.clone(), edge))
            .collect())
    }
}
