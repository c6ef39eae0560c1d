// Copyright 2025 Cowboy AI, LLC.

//! Workflow execution engine
//!
//! Applies a validated command to each target transaction in order. Every
//! transaction is loaded, guarded, mutated and saved on its own; there is
//! no atomicity across a batch.

use super::aggregate::Transaction;
use super::applicable::{ApplicableCommand, CommandBuilder};
use super::authorization::{ensure_executable, is_applicable};
use super::commands::{WorkflowCommand, WorkflowCommandType};
use super::events::{EventPublisher, NoopEventPublisher, WorkflowTaskRecorded};
use super::roles::RoleMembership;
use super::rules::{CatalogRules, WorkflowRules};
use super::status::TransactionStatus;
use super::task::WorkflowTask;
use crate::config::{EngineConfig, WorkflowConfig};
use crate::entity::AggregateRoot;
use crate::errors::{WorkflowError, WorkflowResult};
use crate::identifiers::{ContactId, TransactionId};
use crate::persistence::TransactionRepository;
use crate::state_machine::MealyStateTransitions;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs workflow commands against stored transactions
pub struct WorkflowEngine {
    repository: Arc<dyn TransactionRepository>,
    roles: Arc<dyn RoleMembership>,
    rules: Arc<dyn WorkflowRules>,
    publisher: Arc<dyn EventPublisher>,
    config: EngineConfig,
}

impl WorkflowEngine {
    /// Create an engine with default settings and no event sink
    pub fn new(
        repository: Arc<dyn TransactionRepository>,
        roles: Arc<dyn RoleMembership>,
        rules: Arc<dyn WorkflowRules>,
    ) -> Self {
        Self {
            repository,
            roles,
            rules,
            publisher: Arc::new(NoopEventPublisher),
            config: EngineConfig::default(),
        }
    }

    /// Create an engine whose rules come from the configured catalog lists
    pub fn from_config(
        repository: Arc<dyn TransactionRepository>,
        roles: Arc<dyn RoleMembership>,
        config: WorkflowConfig,
    ) -> Self {
        Self::new(
            repository,
            roles,
            Arc::new(CatalogRules::new(config.rules)),
        )
        .with_config(config.engine)
    }

    /// Publish appended tasks to `publisher`
    pub fn with_publisher(mut self, publisher: Arc<dyn EventPublisher>) -> Self {
        self.publisher = publisher;
        self
    }

    /// Replace the engine settings
    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Engine settings
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Builder for applicable commands over this engine's rules and roles
    pub fn command_builder(&self) -> CommandBuilder<'_> {
        CommandBuilder::new(self.roles.as_ref(), self.rules.as_ref())
    }

    /// Statuses `transaction` may move to
    pub fn next_statuses(&self, transaction: &Transaction) -> Vec<TransactionStatus> {
        transaction
            .status()
            .valid_transitions(&transaction.transition_context(self.rules.as_ref()))
    }

    /// Is `command_type` applicable to `transaction` for `user`?
    pub fn is_applicable(
        &self,
        command_type: WorkflowCommandType,
        transaction: &Transaction,
        user: &ContactId,
    ) -> bool {
        is_applicable(command_type, transaction, user, self.roles.as_ref())
    }

    /// Commands offered to `user` over a multi-selection of transactions
    pub async fn applicable_commands(
        &self,
        user: &ContactId,
        transaction_ids: &[TransactionId],
    ) -> WorkflowResult<Vec<ApplicableCommand>> {
        let mut transactions = Vec::with_capacity(transaction_ids.len());
        for id in transaction_ids {
            transactions.push(self.load(id).await?);
        }
        Ok(self.command_builder().aggregate(user, &transactions))
    }

    /// Execute `command` as `user`
    ///
    /// Returns the current task of every target transaction, in command
    /// order, whether or not the command changed it. A failure stops the
    /// batch; transactions already processed stay saved and the error says
    /// how many there were.
    pub async fn execute(
        &self,
        command: &WorkflowCommand,
        user: &ContactId,
    ) -> WorkflowResult<Vec<WorkflowTask>> {
        if let Err(err) = command.validate() {
            warn!(command = %command.command_type, user = %user, error = %err, "rejected workflow command");
            return Err(err);
        }

        let targets = &command.payload.transaction_uids;
        let mut results = Vec::with_capacity(targets.len());

        for (processed, id) in targets.iter().enumerate() {
            match self.execute_one(command, id, user).await {
                Ok(task) => results.push(task),
                Err(err) => {
                    warn!(
                        command = %command.command_type,
                        transaction = %id,
                        processed,
                        error = %err,
                        "workflow command failed"
                    );
                    if processed == 0 {
                        return Err(err);
                    }
                    return Err(WorkflowError::BatchInterrupted {
                        processed,
                        transaction: id.to_string(),
                        source: Box::new(err),
                    });
                }
            }
        }

        Ok(results)
    }

    async fn load(&self, id: &TransactionId) -> WorkflowResult<Transaction> {
        self.repository
            .load(id)
            .await?
            .ok_or_else(|| WorkflowError::TransactionNotFound(id.to_string()))
    }

    async fn execute_one(
        &self,
        command: &WorkflowCommand,
        id: &TransactionId,
        user: &ContactId,
    ) -> WorkflowResult<WorkflowTask> {
        let mut transaction = self.load(id).await?;

        ensure_executable(
            command.command_type,
            command.payload.next_status,
            &transaction,
            user,
            self.roles.as_ref(),
            self.rules.as_ref(),
        )?;

        let previous_status = transaction.status();
        let loaded_version = transaction.version();

        match self.next_task(command, &transaction, user) {
            Some(task) => {
                transaction.record_task(task.clone());
                self.repository.save(&transaction, loaded_version).await?;

                info!(
                    transaction = %id,
                    command = %command.command_type,
                    from = %previous_status,
                    to = %task.current_status(),
                    next = ?task.next_status(),
                    "workflow task recorded"
                );

                // The task is committed; a lost event does not undo it
                if let Err(err) = self.publisher.publish(WorkflowTaskRecorded {
                    transaction_id: *id,
                    command_type: command.command_type,
                    previous_status,
                    acting_user: *user,
                    task,
                }) {
                    warn!(transaction = %id, error = %err, "failed to publish workflow event");
                }
            }
            None => {
                debug!(
                    transaction = %id,
                    command = %command.command_type,
                    status = %previous_status,
                    "command left the workflow unchanged"
                );
            }
        }

        Ok(transaction.current_task().clone())
    }

    /// The task `command` appends to `transaction`, if any
    fn next_task(
        &self,
        command: &WorkflowCommand,
        transaction: &Transaction,
        user: &ContactId,
    ) -> Option<WorkflowTask> {
        let payload = &command.payload;
        let status = transaction.status();

        match command.command_type {
            WorkflowCommandType::Receive => {
                let destination = transaction
                    .pending_status()
                    .unwrap_or(TransactionStatus::Control);
                Some(WorkflowTask::new(destination, *user, payload.note.clone()))
            }
            WorkflowCommandType::SetNextStatus => Some(
                WorkflowTask::new(status, *user, payload.note.clone())
                    .proposing(payload.next_status, payload.assign_to),
            ),
            WorkflowCommandType::ReturnToMe => {
                Some(WorkflowTask::new(status, *user, payload.note.clone()))
            }
            WorkflowCommandType::Finish => {
                let Some(closing) = transaction.closing_status() else {
                    warn!(
                        transaction = %transaction.id(),
                        status = %status,
                        "finish ignored outside the delivery and returns desks"
                    );
                    return None;
                };
                if transaction.is_finished() {
                    warn!(
                        transaction = %transaction.id(),
                        closing = %closing,
                        "finish ignored, already handed over"
                    );
                    return None;
                }
                Some(
                    WorkflowTask::new(status, *user, payload.note.clone())
                        .proposing(closing, Some(self.config.delivery_actor)),
                )
            }
            WorkflowCommandType::Reentry => Some(WorkflowTask::new(
                TransactionStatus::Reentry,
                *user,
                payload.note.clone(),
            )),
            // Signing and archival collaborators own these
            WorkflowCommandType::AssignTo
            | WorkflowCommandType::PullToControlDesk
            | WorkflowCommandType::Sign
            | WorkflowCommandType::Unarchive
            | WorkflowCommandType::Unsign => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifiers::{DocumentType, TransactionType};
    use crate::persistence::InMemoryTransactionRepository;
    use crate::workflow::events::InMemoryEventPublisher;
    use crate::workflow::roles::{InMemoryRoleDirectory, WorkflowRole};

    struct Fixture {
        repository: InMemoryTransactionRepository,
        roles: Arc<InMemoryRoleDirectory>,
        publisher: InMemoryEventPublisher,
        engine: WorkflowEngine,
    }

    fn fixture() -> Fixture {
        let repository = InMemoryTransactionRepository::new();
        let roles = Arc::new(InMemoryRoleDirectory::new());
        let publisher = InMemoryEventPublisher::new();
        let engine = WorkflowEngine::new(
            Arc::new(repository.clone()),
            roles.clone(),
            Arc::new(CatalogRules::default()),
        )
        .with_publisher(Arc::new(publisher.clone()));
        Fixture {
            repository,
            roles,
            publisher,
            engine,
        }
    }

    async fn stored_at(fixture: &Fixture, status: TransactionStatus, owner: ContactId) -> TransactionId {
        let transaction = Transaction::new(
            TransactionId::new(),
            TransactionType::INSCRIPTION,
            DocumentType::NOTARIAL_DEED,
            WorkflowTask::new(status, owner, ""),
        );
        let id = transaction.id();
        fixture.repository.insert(transaction).await.unwrap();
        id
    }

    #[tokio::test]
    async fn test_receive_moves_to_control_desk() {
        let f = fixture();
        let clerk = ContactId::new();
        f.roles.grant(clerk, WorkflowRole::ControlClerk);
        let id = stored_at(&f, TransactionStatus::Received, ContactId::new()).await;

        let command = WorkflowCommand::new(
            WorkflowCommandType::Receive,
            vec![id],
            TransactionStatus::Control,
        )
        .with_note("recibido en mesa");
        let tasks = f.engine.execute(&command, &clerk).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].current_status(), TransactionStatus::Control);
        assert_eq!(tasks[0].responsible(), clerk);
        assert_eq!(tasks[0].note(), "recibido en mesa");

        let stored = f.repository.load(&id).await.unwrap().unwrap();
        assert_eq!(stored.status(), TransactionStatus::Control);
        assert_eq!(stored.history_len(), 2);
        assert_eq!(f.publisher.published().len(), 1);
    }

    #[tokio::test]
    async fn test_set_next_status_outside_table_is_rejected() {
        let f = fixture();
        let user = ContactId::new();
        let id = stored_at(&f, TransactionStatus::Control, user).await;

        let command = WorkflowCommand::new(
            WorkflowCommandType::SetNextStatus,
            vec![id],
            TransactionStatus::Delivered,
        );
        let err = f.engine.execute(&command, &user).await.unwrap_err();

        assert!(matches!(err, WorkflowError::InvalidStateTransition { .. }));
        let stored = f.repository.load(&id).await.unwrap().unwrap();
        assert_eq!(stored.history_len(), 1);
        assert!(f.publisher.published().is_empty());
    }

    #[tokio::test]
    async fn test_no_op_commands_return_current_task() {
        let f = fixture();
        let signer = ContactId::new();
        f.roles.grant(signer, WorkflowRole::Signer);
        let id = stored_at(&f, TransactionStatus::OnSign, ContactId::new()).await;

        let command =
            WorkflowCommand::new(WorkflowCommandType::Sign, vec![id], TransactionStatus::OnSign);
        let tasks = f.engine.execute(&command, &signer).await.unwrap();

        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0].current_status(), TransactionStatus::OnSign);
        let stored = f.repository.load(&id).await.unwrap().unwrap();
        assert_eq!(stored.history_len(), 1);
        assert_eq!(stored.version(), 0);
    }

    #[tokio::test]
    async fn test_missing_role_is_authorization_error() {
        let f = fixture();
        let id = stored_at(&f, TransactionStatus::Returned, ContactId::new()).await;

        let command =
            WorkflowCommand::new(WorkflowCommandType::Reentry, vec![id], TransactionStatus::Control);
        let err = f.engine.execute(&command, &ContactId::new()).await.unwrap_err();
        assert!(err.is_authorization_error());
    }

    #[tokio::test]
    async fn test_from_config_uses_delivery_actor() {
        let repository = InMemoryTransactionRepository::new();
        let roles = Arc::new(InMemoryRoleDirectory::new());
        let desk = ContactId::new();
        let courier = ContactId::new();
        roles.grant(desk, WorkflowRole::DeliveryClerk);

        let mut config = WorkflowConfig::default();
        config.engine.delivery_actor = courier;
        let engine = WorkflowEngine::from_config(Arc::new(repository.clone()), roles, config);

        let transaction = Transaction::new(
            TransactionId::new(),
            TransactionType::CERTIFICATES,
            DocumentType::PROPERTY_CERTIFICATE,
            WorkflowTask::new(TransactionStatus::ToReturn, desk, ""),
        );
        let id = transaction.id();
        repository.insert(transaction).await.unwrap();

        let command =
            WorkflowCommand::new(WorkflowCommandType::Finish, vec![id], TransactionStatus::Returned);
        let tasks = engine.execute(&command, &desk).await.unwrap();

        assert_eq!(tasks[0].next_status(), Some(TransactionStatus::Returned));
        assert_eq!(tasks[0].next_responsible(), Some(courier));
        assert_eq!(engine.config().delivery_actor, courier);
    }
}
