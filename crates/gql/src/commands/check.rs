use crate::output_utils;
use crate::Cli;
use crate::CommandResult;
use crate::RunnableCommand;
use gql_parser::Location;
use std::collections::HashSet;
use std::error::Error;
use std::path::PathBuf;
use walkdir::WalkDir;

#[derive(Debug, clap::Args)]
pub(crate) struct CheckCmd {
    #[arg(
        default_values_t=[
            "graphql".to_string(),
            "gql".to_string(),
        ],
        help="Set of file extensions to filter to when searching for files \
             within a directory.",
        long="ext",
        value_delimiter = ',',
    )]
    exts: Vec<String>,

    #[arg(
        help="Paths to one or more GraphQL files or directories containing \
             GraphQL files which need to be checked.",
        name="FILE_OR_DIR_PATHS",
        required=true,
    )]
    file_or_dir_paths: Vec<PathBuf>,
}

#[inherent::inherent]
impl RunnableCommand for CheckCmd {
    pub async fn run(self, _cli: Cli) -> CommandResult {
        let mut io_errors: Vec<Box<dyn Error>> = vec![];

        // Normalize the set of file extensions to filter with
        let exts: HashSet<String> =
            self.exts.iter()
                .map(|ext| ext.trim_start_matches('.').to_string())
                .collect();

        // Find all GraphQL files recursively located at or under each path
        // passed as an arg.
        log::debug!(
            "Scanning {} input paths...",
            self.file_or_dir_paths.len(),
        );
        let mut num_skipped_files: usize = 0;
        let mut file_paths = vec![];
        for path in &self.file_or_dir_paths {
            for entry in WalkDir::new(path.as_path()).follow_links(true) {
                match entry {
                    Ok(entry) => {
                        let entry_path = entry.path();
                        if !entry.file_type().is_file() {
                            log::trace!("Skipping non-file: {entry_path:#?}.");
                            continue;
                        }
                        let matches_ext =
                            entry_path.extension()
                                .map(|ext| ext.to_string_lossy())
                                .is_some_and(|ext| exts.contains(ext.as_ref()));
                        if matches_ext {
                            log::trace!("Found file at {entry_path:#?}.");
                            file_paths.push(entry_path.to_path_buf());
                        } else {
                            num_skipped_files += 1;
                        }
                    },

                    Err(e) => {
                        log::trace!(
                            "Encountered an error while iterating recursive \
                            filesystem entities at/under {path:#?}."
                        );
                        io_errors.push(Box::new(e));
                        continue
                    },
                }
            }
        }

        // If the user specifies a single file path as an argument, presume the
        // user explicitly wants that file checked as a GraphQL file -- even if
        // its file extension doesn't match one of the file extensions
        // specified with `--ext`.
        if file_paths.is_empty()
            && self.file_or_dir_paths.len() == 1
            && let Some(first_arg_path) = self.file_or_dir_paths.first()
            && first_arg_path.is_file() {
            log::warn!(
                "Proceeding to check {first_arg_path:#?} even though it \
                doesn't match any of the --ext values ({}).",
                exts.iter()
                    .map(|ext| format!("`.{ext}`"))
                    .collect::<Vec<_>>()
                    .join(", "),
            );
            file_paths.push(first_arg_path.clone());
            num_skipped_files = num_skipped_files.saturating_sub(1);
        }

        log::debug!(
            "Found {} GraphQL files to be checked.",
            file_paths.len(),
        );

        let mut diagnostics: Vec<String> = vec![];
        let mut num_definitions = 0;
        for file_path in &file_paths {
            let source = match std::fs::read_to_string(file_path) {
                Ok(source) => source,
                Err(e) => {
                    io_errors.push(Box::new(e));
                    continue;
                },
            };
            let location = Location::new(
                Some(file_path.display().to_string()),
                None,
            );
            match gql_parser::parse(&location, &source) {
                Ok(document) => {
                    log::trace!("Parsed {file_path:#?}.");
                    num_definitions += document.definitions.len();
                },
                Err(e) => {
                    diagnostics.push(e.format_detailed(Some(&source)));
                },
            }
        }

        if !diagnostics.is_empty() || !io_errors.is_empty() {
            let mut output = String::new();
            for diagnostic in &diagnostics {
                output.push_str(diagnostic);
                output.push('\n');
            }
            if !io_errors.is_empty() {
                output.push_str(&format!(
                    "{} Filesystem errors: {io_errors:#?}\n",
                    output_utils::RED_X,
                ));
            }
            return CommandResult::stderr(format_args!(
                "{output}{} Found {} errors across {} files.",
                output_utils::RED_X,
                diagnostics.len() + io_errors.len(),
                file_paths.len(),
            ));
        }

        CommandResult::stdout(format_args!(
            concat!(
                "{} All GraphQL parsed successfully:\n",
                "  * Checked {} files.\n",
                "  * Skipped {} non-GraphQL files.\n",
                "  * Parsed {} definitions.",
            ),
            output_utils::GREEN_CHECK,
            file_paths.len(),
            num_skipped_files,
            num_definitions,
        ))
    }
}
