use ballot_state::codec::JsonCodec;
use ballot_state::*;
use borsh::{BorshDeserialize, BorshSerialize};

enum Operation {
    Merge,
    Finalize,
}

impl Operation {
    fn execute<S: Storage>(&self, working_set: WorkingSet<S>) -> StateCheckpoint<S> {
        match self {
            Operation::Merge => working_set.checkpoint(),
            Operation::Finalize => {
                let db = working_set
                    .checkpoint()
                    .commit()
                    .expect("In-memory commit is valid");

                StateCheckpoint::new(db)
            }
        }
    }
}

struct StorageOperation {
    operations: Vec<Operation>,
}

impl StorageOperation {
    fn execute<S: Storage>(&self, mut working_set: WorkingSet<S>) -> WorkingSet<S> {
        for op in self.operations.iter() {
            working_set = op.execute(working_set).to_revertable()
        }
        working_set
    }
}

fn create_storage_operations() -> Vec<(StorageOperation, StorageOperation)> {
    // Interleavings of merges and commits around the operation under test.
    vec![
        (
            StorageOperation { operations: vec![] },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Merge],
            },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Merge, Operation::Finalize],
            },
            StorageOperation { operations: vec![] },
        ),
        (
            StorageOperation {
                operations: vec![Operation::Merge],
            },
            StorageOperation {
                operations: vec![Operation::Finalize],
            },
        ),
        (
            StorageOperation { operations: vec![] },
            StorageOperation {
                operations: vec![Operation::Merge, Operation::Finalize],
            },
        ),
    ]
}

fn create_state_map(key: u32, value: u32) -> (StateMap<u32, u32>, WorkingSet<MemoryStorage>) {
    let mut working_set = WorkingSet::new(MemoryStorage::new());

    let state_map = StateMap::new(Prefix::new(vec![0]));
    state_map.set(&key, &value, &mut working_set);
    (state_map, working_set)
}

#[test]
fn test_state_map_overwrite() {
    for (before_set, after_set) in create_storage_operations() {
        let key = 1;
        let (state_map, mut working_set) = create_state_map(key, 11);

        working_set = before_set.execute(working_set);
        assert_eq!(state_map.get(&key, &mut working_set), Some(11));
        state_map.set(&key, &12, &mut working_set);

        working_set = after_set.execute(working_set);
        assert_eq!(state_map.get(&key, &mut working_set), Some(12));
        assert_eq!(state_map.get(&2, &mut working_set), None);
    }
}

fn create_state_value(value: u32) -> (StateValue<u32>, WorkingSet<MemoryStorage>) {
    let mut working_set = WorkingSet::new(MemoryStorage::new());

    let state_value = StateValue::new(Prefix::new(vec![0]));
    state_value.set(&value, &mut working_set);
    (state_value, working_set)
}

#[test]
fn test_state_value_overwrite() {
    for (before_set, after_set) in create_storage_operations() {
        let (state_value, mut working_set) = create_state_value(11);

        working_set = before_set.execute(working_set);
        assert_eq!(state_value.get(&mut working_set), Some(11));
        state_value.set(&12, &mut working_set);

        working_set = after_set.execute(working_set);
        assert_eq!(state_value.get(&mut working_set), Some(12));
    }
}

#[test]
fn test_revert_drops_only_the_latest_writes() {
    let storage = MemoryStorage::new();
    let state_map: StateMap<u32, u32> = StateMap::new(Prefix::new(b"map".to_vec()));

    let mut working_set = WorkingSet::new(storage.clone());
    state_map.set(&1, &100, &mut working_set);
    let checkpoint = working_set.checkpoint();

    let mut working_set = checkpoint.to_revertable();
    state_map.set(&1, &200, &mut working_set);
    state_map.set(&2, &300, &mut working_set);
    working_set.add_event("discarded", "event");
    let checkpoint = working_set.revert();

    let mut working_set = checkpoint.to_revertable();
    assert_eq!(state_map.get(&1, &mut working_set), Some(100));
    assert_eq!(state_map.get(&2, &mut working_set), None);
    assert!(working_set.events().is_empty());

    // Nothing reaches the storage until the checkpoint is committed.
    assert!(storage.is_empty());
    working_set.checkpoint().commit().unwrap();
    assert_eq!(storage.len(), 1);
}

#[test]
fn test_committed_values_survive_a_snapshot() {
    let storage = MemoryStorage::new();
    let state_value: StateValue<String> = StateValue::new(Prefix::new(b"greeting".to_vec()));

    let mut working_set = WorkingSet::new(storage.clone());
    state_value.set(&"hello".to_owned(), &mut working_set);
    working_set.checkpoint().commit().unwrap();

    let restored = MemoryStorage::from_snapshot(&storage.snapshot()).unwrap();
    let mut working_set = WorkingSet::new(restored);
    assert_eq!(
        state_value.get(&mut working_set).as_deref(),
        Some("hello")
    );
}

#[test]
fn test_get_or_err_reports_the_prefix() {
    let mut working_set = WorkingSet::new(MemoryStorage::new());
    let state_map: StateMap<u64, u64> = StateMap::new(Prefix::new(b"votes".to_vec()));
    let state_value: StateValue<u64> = StateValue::new(Prefix::new(b"counter".to_vec()));

    let map_err = state_map.get_or_err(&7, &mut working_set).unwrap_err();
    assert!(map_err.to_string().contains("\"votes\""));

    let value_err = state_value.get_or_err(&mut working_set).unwrap_err();
    assert_eq!(
        value_err.to_string(),
        "Value not found for prefix: \"counter\""
    );
}

#[derive(Debug, Clone, PartialEq, BorshSerialize, BorshDeserialize)]
struct Tally {
    name: String,
    votes: u64,
}

#[test]
fn test_tuple_keys_and_struct_values() {
    let mut working_set = WorkingSet::new(MemoryStorage::new());
    let tallies: StateMap<(u64, [u8; 4]), Tally> = StateMap::new(Prefix::new(b"tally".to_vec()));

    let tally = Tally {
        name: "alice".to_owned(),
        votes: 3,
    };
    tallies.set(&(1, *b"abcd"), &tally, &mut working_set);

    assert_eq!(tallies.get(&(1, *b"abcd"), &mut working_set), Some(tally));
    assert_eq!(tallies.get(&(2, *b"abcd"), &mut working_set), None);
}

#[test]
fn test_json_codec_container() {
    let mut working_set = WorkingSet::new(MemoryStorage::new());
    let names: StateMap<String, Vec<String>, JsonCodec> =
        StateMap::with_codec(Prefix::new(b"names".to_vec()), JsonCodec);

    names.set(
        &"ballot".to_owned(),
        &vec!["alice".to_owned(), "bob".to_owned()],
        &mut working_set,
    );
    assert_eq!(
        names.get(&"ballot".to_owned(), &mut working_set),
        Some(vec!["alice".to_owned(), "bob".to_owned()])
    );
}
