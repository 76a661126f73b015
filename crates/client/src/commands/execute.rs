use agenda_core::records::{EntityKind, Listing, Record, RecordId, RelationAction};
use agenda_core::remote::{RecordStore, RemoteError};
use tracing::{debug, info, warn};

use super::{Operation, Verb};
use crate::cli::Commands;
use crate::error::Result;

/// What a command did, for the output layer to report.
#[derive(Debug)]
pub enum Outcome {
    /// `stored` is the record the store echoed back, if any.
    Created {
        record: Record,
        stored: Option<Record>,
    },
    Updated {
        kind: EntityKind,
        id: RecordId,
        stored: Option<Record>,
    },
    /// Deletes always report; `error` holds the store failure, if any.
    Deleted {
        kind: EntityKind,
        id: RecordId,
        error: Option<RemoteError>,
    },
    Listed {
        kind: EntityKind,
        listing: Listing,
    },
    Usage(Verb),
}

impl Outcome {
    /// False only for a delete the store refused.
    pub fn succeeded(&self) -> bool {
        !matches!(self, Outcome::Deleted { error: Some(_), .. })
    }
}

/// Validates a parsed command and runs it against `store`.
///
/// Validation failures return before the store is touched.
pub async fn run<S: RecordStore + ?Sized>(command: Commands, store: &S) -> Result<Outcome> {
    let operation = Operation::try_from(command)?;
    execute(operation, store).await
}

/// Runs a validated operation, one store call at a time.
///
/// Updates send each relation directive first, in order, then the field
/// update itself.
pub async fn execute<S: RecordStore + ?Sized>(operation: Operation, store: &S) -> Result<Outcome> {
    match operation {
        Operation::Create(record) => {
            info!(kind = %record.kind(), id = %record.id(), "creating record");
            let stored = store.create(&record).await?;
            Ok(Outcome::Created { record, stored })
        }
        Operation::Update(patch) => {
            let kind = patch.kind();
            let id = patch.id().clone();
            for directive in patch.directives() {
                info!(
                    %kind,
                    %id,
                    relation = %directive.relation,
                    related_id = %directive.id,
                    action = directive.action.verb(),
                    "editing relation"
                );
                match directive.action {
                    RelationAction::Add => {
                        store
                            .add_relation(kind, &id, directive.relation, &directive.id)
                            .await?;
                    }
                    RelationAction::Remove => {
                        store
                            .remove_relation(kind, &id, directive.relation, &directive.id)
                            .await?;
                    }
                }
            }
            info!(%kind, %id, "updating record");
            let stored = store.update(&patch).await?;
            Ok(Outcome::Updated { kind, id, stored })
        }
        Operation::Delete { kind, id } => {
            info!(%kind, %id, "deleting record");
            let error = match store.delete(kind, &id).await {
                Ok(()) => None,
                Err(error) => {
                    warn!(%kind, %id, %error, "delete failed");
                    Some(error)
                }
            };
            Ok(Outcome::Deleted { kind, id, error })
        }
        Operation::List { kind, filter } => {
            if let Some(filter) = filter {
                warn!(%kind, %filter, "id filter is ignored; listing every record");
            }
            let listing = store.get_all(kind).await?;
            debug!(%kind, count = listing.len(), related = listing.related.len(), "listed records");
            Ok(Outcome::Listed { kind, listing })
        }
        Operation::Usage(verb) => Ok(Outcome::Usage(verb)),
    }
}
