use ballot::{BallotConfig, BallotError, Ballots, CallMessage, CandidateEntry};
use ballot_modules_api::default_context::DefaultContext;
use ballot_modules_api::{
    dispatch_call, Address, Context, MemoryStorage, Module, ModuleError, StateCheckpoint,
    TransactionReceipt, WorkingSet,
};

pub type C = DefaultContext;

pub fn generate_address(key: &str) -> Address {
    ballot_modules_api::utils::generate_address::<C>(key)
}

pub fn candidates(names: &[&str]) -> Vec<CandidateEntry<C>> {
    names
        .iter()
        .map(|name| CandidateEntry {
            name: (*name).to_owned(),
            identity: generate_address(name),
        })
        .collect()
}

pub fn open_message(name: &str, duration: u64, candidate_names: &[&str]) -> CallMessage<C> {
    CallMessage::Open {
        name: name.to_owned(),
        duration,
        candidates: candidates(candidate_names),
    }
}

/// Runs calls one after the other on top of a single checkpoint, the way the
/// dispatcher does.
pub struct TestRunner {
    pub module: Ballots<C>,
    pub storage: MemoryStorage,
    checkpoint: Option<StateCheckpoint<C>>,
}

#[allow(dead_code)]
impl TestRunner {
    pub fn new() -> Self {
        Self::with_config(BallotConfig::default())
    }

    pub fn with_config(config: BallotConfig) -> Self {
        let storage = MemoryStorage::new();
        let module = Ballots::<C>::default();
        let mut working_set = WorkingSet::<C>::new(storage.clone());
        module.genesis(&config, &mut working_set).unwrap();

        Self {
            module,
            storage,
            checkpoint: Some(working_set.checkpoint()),
        }
    }

    /// Calls the module directly and keeps or drops its writes depending on the outcome.
    pub fn execute(
        &mut self,
        sender: &Address,
        height: u64,
        message: CallMessage<C>,
    ) -> Result<(), ModuleError> {
        let context = C::new(*sender, height);
        let mut working_set = self.take_checkpoint().to_revertable();
        let result = self.module.call(message, &context, &mut working_set);

        self.checkpoint = Some(match result {
            Ok(_) => working_set.checkpoint(),
            Err(_) => working_set.revert(),
        });
        result.map(|_| ())
    }

    pub fn dispatch(
        &mut self,
        sender: &Address,
        height: u64,
        message: CallMessage<C>,
    ) -> TransactionReceipt {
        let context = C::new(*sender, height);
        let checkpoint = self.take_checkpoint();
        let (receipt, checkpoint) = dispatch_call(&self.module, message, &context, checkpoint);
        self.checkpoint = Some(checkpoint);
        receipt
    }

    /// Runs a call that must fail and returns the reason.
    pub fn expect_error(
        &mut self,
        sender: &Address,
        height: u64,
        message: CallMessage<C>,
    ) -> BallotError {
        let ModuleError::ModuleError(err) = self
            .execute(sender, height, message)
            .expect_err("The call should have failed");
        BallotError::from_module_error(&err)
            .cloned()
            .unwrap_or_else(|| panic!("Not a ballot error: {err:?}"))
    }

    pub fn query<T>(&mut self, f: impl FnOnce(&Ballots<C>, &mut WorkingSet<C>) -> T) -> T {
        let mut working_set = self.take_checkpoint().to_revertable();
        let result = f(&self.module, &mut working_set);
        self.checkpoint = Some(working_set.revert());
        result
    }

    pub fn commit(&mut self) {
        let storage = self.take_checkpoint().commit().unwrap();
        self.checkpoint = Some(StateCheckpoint::<C>::new(storage));
    }

    fn take_checkpoint(&mut self) -> StateCheckpoint<C> {
        self.checkpoint
            .take()
            .expect("The checkpoint is always put back")
    }
}
