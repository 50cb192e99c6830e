use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gql_parser::ast::AstNode;
use gql_parser::Location;
use std::path::PathBuf;

#[derive(Debug, clap::Args)]
pub(crate) struct PrintCmd {
    #[arg(
        help="Path to a GraphQL file to parse and reprint in canonical form.",
        name="FILE_PATH",
        required=true,
    )]
    file_path: PathBuf,
}

#[inherent::inherent]
impl RunnableCommand for PrintCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let source = match std::fs::read_to_string(&self.file_path) {
            Ok(source) => source,
            Err(e) => {
                return CommandResult::stderr(format_args!(
                    "Failed to read {:#?}: {e}",
                    self.file_path,
                ));
            },
        };

        let location = Location::new(
            Some(self.file_path.display().to_string()),
            None,
        );
        match gql_parser::parse(&location, &source) {
            Ok(document) => CommandResult::stdout(format_args!(
                "{}",
                document.to_source(),
            )),
            Err(e) => {
                let detailed = e.format_detailed(Some(&source));
                CommandResult::stderr(format_args!(
                    "{}",
                    detailed.trim_end_matches('\n'),
                ))
            },
        }
    }
}
