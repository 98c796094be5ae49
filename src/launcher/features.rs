//! Fixed allow-list of Mechanical feature flags.

/// A feature flag recognized by the Mechanical startup sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureFlag {
    /// Name accepted on the command line (`--features Name;Other`).
    pub name: &'static str,
    /// Vendor-namespaced identifier forwarded to the application.
    pub token: &'static str,
    /// First release that understands the flag.
    pub min_version: u32,
}

/// Feature flags recognized by this launcher.
///
/// Names missing from this table (or gated behind a newer release than the
/// one being launched) are still forwarded verbatim so the application can
/// make the final call.
pub const RECOGNIZED_FLAGS: &[FeatureFlag] = &[
    FeatureFlag {
        name: "ThermalShells",
        token: "Mechanical.ThermalShells",
        min_version: 231,
    },
    FeatureFlag {
        name: "MultistageHarmonic",
        token: "Mechanical.MultistageHarmonic",
        min_version: 232,
    },
    FeatureFlag {
        name: "CPython",
        token: "Mechanical.CPython.Capability",
        min_version: 232,
    },
];

/// Result of splitting a raw `;`-separated feature string.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeaturePartition {
    known: Vec<&'static str>,
    unknown: Vec<String>,
}

impl FeaturePartition {
    /// Combined token for all recognized features, `;`-joined.
    pub fn known_token(&self) -> Option<String> {
        if self.known.is_empty() {
            None
        } else {
            Some(self.known.join(";"))
        }
    }

    /// Raw token carrying the unrecognized names verbatim.
    pub fn unknown_token(&self) -> Option<String> {
        if self.unknown.is_empty() {
            None
        } else {
            Some(self.unknown.join(";"))
        }
    }

    /// Unrecognized names, in input order.
    pub fn unknown_names(&self) -> &[String] {
        &self.unknown
    }
}

/// Split a raw feature string into recognized identifiers and unknown names.
pub fn partition(raw: &str, version: u32) -> FeaturePartition {
    let mut result = FeaturePartition::default();
    for name in raw.split(';').map(str::trim).filter(|name| !name.is_empty()) {
        match RECOGNIZED_FLAGS
            .iter()
            .find(|flag| flag.name == name && version >= flag.min_version)
        {
            Some(flag) => result.known.push(flag.token),
            None => result.unknown.push(name.to_string()),
        }
    }
    result
}
