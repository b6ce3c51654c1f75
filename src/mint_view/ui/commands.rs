use alloy_primitives::Address;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    None,
    CheckExistingConnection,
    RequestAccounts,
    ArmSubscriptions(Address),
    RefreshSupply,
    SubmitMint(Address),
    Reload,
    CopyToClipboard(String),
    ScheduleDismissToast { id: u64, delay_ms: u64 },
    Batch(Vec<Command>),
}

impl Command {
    /// Flatten into a batch, dropping `None`s
    pub fn and(self, next: Command) -> Command {
        match (self, next) {
            (Command::None, other) | (other, Command::None) => other,
            (Command::Batch(mut first), Command::Batch(rest)) => {
                first.extend(rest);
                Command::Batch(first)
            }
            (Command::Batch(mut first), other) => {
                first.push(other);
                Command::Batch(first)
            }
            (first, Command::Batch(mut rest)) => {
                rest.insert(0, first);
                Command::Batch(rest)
            }
            (first, second) => Command::Batch(vec![first, second]),
        }
    }
}
