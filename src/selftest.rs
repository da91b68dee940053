//! The documented usage examples, runnable as checks.

use anyhow::{Result, ensure};
use log::{error, info};

use crate::config::Config;
use crate::error::ListError;
use crate::node::Node;

pub struct Check {
    pub name: &'static str,
    run: fn() -> Result<()>,
}

impl Check {
    pub fn run(&self) -> Result<()> {
        (self.run)()
    }
}

pub const CHECKS: &[Check] = &[
    Check { name: "append", run: append },
    Check { name: "pop", run: pop },
    Check { name: "push", run: push },
    Check { name: "reversed", run: reversed },
    Check { name: "iter", run: iter },
    Check { name: "display", run: display },
    Check { name: "arrow", run: arrow },
    Check { name: "get", run: get },
    Check { name: "set", run: set },
    Check { name: "len", run: len },
    Check { name: "contains", run: contains },
];

pub fn find(name: &str) -> Option<&'static Check> {
    CHECKS.iter().find(|check| check.name == name)
}

#[derive(Debug, Default)]
pub struct Report {
    pub passed: usize,
    pub failures: Vec<(&'static str, String)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Runs every check, or only `config.only` when set.
pub fn run(config: &Config) -> Report {
    let mut report = Report::default();

    let selected = CHECKS
        .iter()
        .filter(|check| config.only.as_deref().is_none_or(|name| name == check.name));
    for check in selected {
        match check.run() {
            Ok(()) => {
                info!("check `{}` passed", check.name);
                report.passed += 1;
            }
            Err(e) => {
                error!("check `{}` failed: {}", check.name, e);
                report.failures.push((check.name, e.to_string()));
            }
        }
    }

    report
}

fn append() -> Result<()> {
    let mut list = Node::new();
    list.append(1);
    ensure!(list.to_string() == "[1]", "got {}", list);
    list.append(2);
    ensure!(list.to_string() == "[1, 2]", "got {}", list);
    Ok(())
}

fn pop() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    ensure!(list.to_string() == "[1, 2]", "got {}", list);
    ensure!(list.pop()? == 2);
    ensure!(list.pop()? == 1);
    ensure!(list.to_string() == "[]", "got {}", list);
    ensure!(list.pop() == Err(ListError::EmptyCollection));
    Ok(())
}

fn push() -> Result<()> {
    let mut list = Node::with_value(1);
    ensure!(list.to_string() == "[1]", "got {}", list);
    list.push(2);
    ensure!(list.to_string() == "[2, 1]", "got {}", list);
    Ok(())
}

fn reversed() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    let list = list.reversed();
    ensure!(list.to_string() == "[2, 1]", "got {}", list);
    Ok(())
}

fn iter() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    let mut iter = list.iter();
    ensure!(*iter.try_next()? == 1);
    ensure!(*iter.try_next()? == 2);
    ensure!(iter.try_next() == Err(ListError::IteratorExhausted));
    Ok(())
}

fn display() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    ensure!(list.to_bracket_string() == "[1, 2]");
    ensure!(Node::<i32>::new().to_bracket_string() == "[]");
    Ok(())
}

fn arrow() -> Result<()> {
    let mut list = Node::with_value(10);
    list.append(20);
    list.append(30);
    ensure!(list.to_arrow_string() == "10->20->30", "got {}", list.to_arrow_string());
    let list = list.reversed();
    ensure!(list.to_arrow_string() == "30->20->10", "got {}", list.to_arrow_string());
    Ok(())
}

fn get() -> Result<()> {
    let list: Node<i32> = (1..=3).collect();
    ensure!(*list.get(0)? == 1);
    ensure!(*list.get(2)? == 3);
    ensure!(list.get(3) == Err(ListError::IndexOutOfRange));
    Ok(())
}

fn set() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    ensure!(list.to_arrow_string() == "1->2");
    list.set(0, 2)?;
    ensure!(list.to_arrow_string() == "2->2", "got {}", list.to_arrow_string());
    ensure!(list.set(2, 4) == Err(ListError::IndexOutOfRange));
    Ok(())
}

fn len() -> Result<()> {
    let list: Node<i32> = (1..=3).collect();
    ensure!(list.len() == 3, "got {}", list.len());
    Ok(())
}

fn contains() -> Result<()> {
    let mut list = Node::with_value(1);
    list.append(2);
    ensure!(list.contains(&1));
    ensure!(!list.contains(&3));
    Ok(())
}
