use alloy_primitives::U256;

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum Mode {
    Main,
    Help,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum MintStatus {
    #[default]
    Idle,
    Pending,
    Confirmed,
}

/// Minted count and total supply. One `Option<SupplyCounters>` keeps
/// the pair present or absent together.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SupplyCounters {
    pub minted: String,
    pub total: String,
}

impl SupplyCounters {
    pub fn from_values(minted: U256, total: U256) -> Self {
        Self {
            minted: minted.to_string(),
            total: total.to_string(),
        }
    }

    pub fn label(&self) -> String {
        format!("{} / {} minted", self.minted, self.total)
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub auto_close: bool,
}

/// Toast contents before the view assigns an id
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub auto_close: bool,
}

impl Notice {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity: Severity::Info,
            auto_close: true,
        }
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn persistent(mut self) -> Self {
        self.auto_close = false;
        self
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum LinkKind {
    Explorer,
    Marketplace,
    Collection,
}

impl LinkKind {
    pub fn label(self) -> &'static str {
        match self {
            LinkKind::Explorer => "explorer link",
            LinkKind::Marketplace => "marketplace link",
            LinkKind::Collection => "collection link",
        }
    }
}

/// Shorten `0x5B38Da6a701c568545dCfcB03FcB875f56beddC4` to `0x5B38…ddC4`
pub fn shorten_address(address: &str) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= 12 {
        return address.to_string();
    }
    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}…{tail}")
}
