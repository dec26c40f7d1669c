//! CLI argument parser
use clap::Parser;
use thiserror::Error;

/// Command-line argument parser for `userdb`.
#[derive(Debug, Parser)]
#[command(name = "userdb")]
#[command(
    about = "A user record store backed by a single JSON file",
    long_about = "userdb - manage user records stored as a JSON array in one file.

Operations:
 list     - print the store file as-is
 findById - print every record matching an id
 add      - append a record, rejecting duplicate ids
 remove   - delete every record matching an id

Examples:
 userdb --operation list --fileName users.json
 userdb --operation add --fileName users.json \\
        --item '{\"id\":\"1\",\"email\":\"a@x.com\",\"age\":30}'
 userdb --operation findById --fileName users.json --id 1
 userdb --operation remove --fileName users.json --id 1"
)]
pub struct Args {
    /// Operation to perform: list, findById, add or remove
    #[arg(long, default_value = "")]
    pub operation: String,

    /// Path to the JSON store file
    #[arg(long = "fileName", default_value = "")]
    pub file_name: String,

    /// Record id (required by findById and remove)
    #[arg(long, default_value = "")]
    pub id: String,

    /// Record to add, as a JSON object string (required by add)
    #[arg(long, default_value = "")]
    pub item: String,
}

/// Error type returned when the flag set does not describe a runnable
/// operation.
///
/// One variant per cause so callers can tell them apart; the two missing-id
/// variants share their message text on purpose.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArgsError {
    #[error("-operation flag has to be specified")]
    MissingOperation,
    #[error("-fileName flag has to be specified")]
    MissingFileName,
    #[error("-id flag has to be specified")]
    MissingFindId,
    #[error("-id flag has to be specified")]
    MissingRemoveId,
    #[error("-item flag has to be specified")]
    MissingItem,
    #[error("operation {0} not allowed")]
    UnsupportedOperation(String),
}

/// A fully validated operation, carrying exactly the fields it needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Operation {
    List { file_name: String },
    FindById { file_name: String, id: String },
    Add { file_name: String, item: String },
    Remove { file_name: String, id: String },
}

impl Operation {
    /// Resolves the flat flag set into an [`Operation`].
    ///
    /// Checks run in a fixed order: operation, file name, then the
    /// operation-specific flag. An empty flag value counts as missing.
    ///
    /// # Errors
    ///
    /// Returns an [`ArgsError`] naming the first failed check, or
    /// [`ArgsError::UnsupportedOperation`] for an unknown operation name.
    pub fn resolve(args: &Args) -> Result<Self, ArgsError> {
        if args.operation.is_empty() {
            return Err(ArgsError::MissingOperation);
        }
        if args.file_name.is_empty() {
            return Err(ArgsError::MissingFileName);
        }

        let file_name = args.file_name.clone();
        match args.operation.as_str() {
            "list" => Ok(Self::List { file_name }),
            "findById" => {
                if args.id.is_empty() {
                    return Err(ArgsError::MissingFindId);
                }
                Ok(Self::FindById {
                    file_name,
                    id: args.id.clone(),
                })
            }
            "add" => {
                if args.item.is_empty() {
                    return Err(ArgsError::MissingItem);
                }
                Ok(Self::Add {
                    file_name,
                    item: args.item.clone(),
                })
            }
            "remove" => {
                if args.id.is_empty() {
                    return Err(ArgsError::MissingRemoveId);
                }
                Ok(Self::Remove {
                    file_name,
                    id: args.id.clone(),
                })
            }
            other => Err(ArgsError::UnsupportedOperation(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(operation: &str, file_name: &str, id: &str, item: &str) -> Args {
        Args {
            operation: operation.to_string(),
            file_name: file_name.to_string(),
            id: id.to_string(),
            item: item.to_string(),
        }
    }

    #[test]
    fn missing_operation_is_reported_first() {
        let err = Operation::resolve(&args("", "", "1", "")).unwrap_err();
        assert_eq!(err, ArgsError::MissingOperation);
    }

    #[test]
    fn missing_file_name_is_reported_before_operation_flags() {
        let err = Operation::resolve(&args("findById", "", "", "")).unwrap_err();
        assert_eq!(err, ArgsError::MissingFileName);
    }

    #[test]
    fn find_by_id_requires_an_id() {
        let err =
            Operation::resolve(&args("findById", "users.json", "", "")).unwrap_err();
        assert_eq!(err, ArgsError::MissingFindId);
    }

    #[test]
    fn remove_requires_an_id() {
        let err =
            Operation::resolve(&args("remove", "users.json", "", "")).unwrap_err();
        assert_eq!(err, ArgsError::MissingRemoveId);
    }

    #[test]
    fn add_requires_an_item() {
        let err = Operation::resolve(&args("add", "users.json", "", "")).unwrap_err();
        assert_eq!(err, ArgsError::MissingItem);
    }

    #[test]
    fn unknown_operation_is_rejected_by_name() {
        let err = Operation::resolve(&args("merge", "users.json", "", "")).unwrap_err();
        assert_eq!(err, ArgsError::UnsupportedOperation("merge".to_string()));
        assert_eq!(err.to_string(), "operation merge not allowed");
    }

    #[test]
    fn valid_flags_resolve_to_the_matching_variant() {
        let op = Operation::resolve(&args("list", "users.json", "", "")).unwrap();
        assert_eq!(
            op,
            Operation::List {
                file_name: "users.json".to_string()
            }
        );

        let op = Operation::resolve(&args("remove", "users.json", "7", "")).unwrap();
        assert_eq!(
            op,
            Operation::Remove {
                file_name: "users.json".to_string(),
                id: "7".to_string()
            }
        );
    }

    #[test]
    fn flags_the_operation_does_not_use_are_ignored() {
        let op = Operation::resolve(&args(
            "add",
            "users.json",
            "9",
            r#"{"id":"1","email":"a@x.com","age":30}"#,
        ))
        .unwrap();
        assert!(matches!(op, Operation::Add { .. }));
    }
}
