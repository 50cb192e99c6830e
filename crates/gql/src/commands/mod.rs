mod check;
mod print;

use crate::Cli;
use crate::CommandResult;
use check::CheckCmd;
use print::PrintCmd;

#[derive(Debug, clap::Parser)]
#[command(name = "gql")]
pub(crate) enum CommandEnum {
    Check(Box<CheckCmd>),
    Print(Box<PrintCmd>),
}
impl CommandEnum {
    pub(crate) async fn run(self, cli: Cli) -> CommandResult {
        match self {
            Self::Check(cmd) => cmd.run(cli).await,
            Self::Print(cmd) => cmd.run(cli).await,
        }
    }
}
