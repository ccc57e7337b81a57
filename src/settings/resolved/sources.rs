use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum SettingSource {
	CliFlag(&'static str),
	Environment(String),
	ConfigKey(&'static str),
}

impl fmt::Display for SettingSource {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::CliFlag(flag) => write!(f, "CLI flag `{flag}`"),
			Self::Environment(var) => write!(f, "environment variable `{var}`"),
			Self::ConfigKey(key) => write!(f, "configuration key `{key}`"),
		}
	}
}

/// Where each validated setting came from, for error messages.
#[derive(Debug, Default, Clone)]
pub(crate) struct ConfigSources {
	entries: Vec<(&'static str, SettingSource)>,
}

impl ConfigSources {
	pub(crate) fn record(&mut self, key: &'static str, source: Option<SettingSource>) {
		if let Some(source) = source {
			self.entries.push((key, source));
		}
	}

	/// Source of `key`; values not set by a flag or variable came from a file.
	pub(crate) fn source_for(&self, key: &'static str) -> SettingSource {
		self.entries
			.iter()
			.find(|(entry, _)| *entry == key)
			.map(|(_, source)| source.clone())
			.unwrap_or(SettingSource::ConfigKey(key))
	}
}
