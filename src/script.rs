use std::pin::Pin;

use futures::stream::{self, Stream};

use crate::domain::traits::OperationStream;
use crate::domain::{AccountType, Error, Operation};

/// The demonstration run used when no script file is given.
pub fn demo_operations() -> Vec<Operation> {
    use AccountType::*;

    vec![
        Operation::open(Basic, None, 0.0, 0.0),
        Operation::open(Basic, Some("Larry"), 0.0, 0.0),
        Operation::open(Basic, Some("Moe"), 2000.0, 0.0),
        Operation::open(Basic, Some("Curly"), 5000.0, 0.0),
        Operation::deposit(Basic, 1000.0),
        Operation::withdraw(Basic, 2000.0),
        Operation::open(Savings, None, 0.0, 0.0),
        Operation::open(Savings, Some("Superman"), 0.0, 0.0),
        Operation::open(Savings, Some("Batman"), 2000.0, 0.0),
        Operation::open(Savings, Some("Wonderwoman"), 5000.0, 5.0),
        Operation::deposit(Savings, 1000.0),
        Operation::withdraw(Savings, 2000.0),
        Operation::open(Checking, None, 0.0, 0.0),
        Operation::open(Checking, Some("Larry2"), 0.0, 0.0),
        Operation::open(Checking, Some("Moe2"), 2000.0, 0.0),
        Operation::open(Checking, Some("Curly2"), 5000.0, 0.0),
        Operation::deposit(Checking, 1000.0),
        Operation::withdraw(Checking, 2000.0),
        Operation::withdraw(Checking, 2000.0),
        Operation::open(Trust, None, 0.0, 0.0),
        Operation::open(Trust, Some("Superman2"), 0.0, 0.0),
        Operation::open(Trust, Some("Batman2"), 2000.0, 0.0),
        Operation::open(Trust, Some("Wonderwoman2"), 10000.0, 5.0),
        Operation::deposit(Trust, 1000.0),
        Operation::deposit(Trust, 6000.0),
        Operation::withdraw(Trust, 2000.0),
        Operation::withdraw(Trust, 3000.0),
        Operation::withdraw(Trust, 500.0),
    ]
}

#[derive(Debug)]
pub struct BuiltinScript {
    operations: Option<Vec<Operation>>,
}

impl BuiltinScript {
    pub fn new() -> Self {
        Self::from_operations(demo_operations())
    }

    pub fn from_operations(operations: Vec<Operation>) -> Self {
        Self {
            operations: Some(operations),
        }
    }
}

impl Default for BuiltinScript {
    fn default() -> Self {
        Self::new()
    }
}

impl OperationStream for BuiltinScript {
    type OpStream = Pin<Box<dyn Stream<Item = Result<Operation, Error>> + Send>>;

    fn stream(&mut self) -> Self::OpStream {
        let operations = self.operations.take().unwrap_or_default();
        Box::pin(stream::iter(operations.into_iter().map(Ok::<Operation, Error>)))
    }
}
