//! Depth-first flattening of the test tree.

use crate::report::{Report, Test};

/// One flattened test node paired with its resolved parent name.
#[derive(Debug, Clone, Copy)]
pub struct FlatTest<'a> {
    /// Name of the enclosing test, or "" for top-level tests.
    pub parent: &'a str,
    pub test: &'a Test,
}

/// Flattens the report's test tree in document order: each test precedes its
/// subtests and subtests recurse depth-first. The resulting order is stable
/// and part of the contract; downstream consumers may pair requests and
/// responses positionally.
pub fn flatten(report: &Report) -> Vec<FlatTest<'_>> {
    let mut flat = Vec::new();
    let mut stack: Vec<FlatTest<'_>> = report
        .tests
        .iter()
        .rev()
        .map(|test| FlatTest { parent: "", test })
        .collect();

    while let Some(node) = stack.pop() {
        flat.push(node);
        for sub in node.test.sub_tests.iter().rev() {
            stack.push(FlatTest {
                parent: &node.test.name,
                test: sub,
            });
        }
    }

    flat
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str, sub_tests: Vec<Test>) -> Test {
        Test {
            name: name.to_string(),
            sub_tests,
            ..Test::default()
        }
    }

    #[test]
    fn empty_report_flattens_to_nothing() {
        assert!(flatten(&Report::default()).is_empty());
    }

    #[test]
    fn subtests_follow_their_parent_in_document_order() {
        let report = Report {
            tests: vec![
                named("test0", vec![named("test00", vec![])]),
                named("test1", vec![named("test10", vec![])]),
            ],
            ..Report::default()
        };

        let flat = flatten(&report);
        let names: Vec<&str> = flat.iter().map(|f| f.test.name.as_str()).collect();
        assert_eq!(names, vec!["test0", "test00", "test1", "test10"]);

        let parents: Vec<&str> = flat.iter().map(|f| f.parent).collect();
        assert_eq!(parents, vec!["", "test0", "", "test1"]);
    }

    #[test]
    fn deep_nesting_resolves_each_enclosing_name() {
        let report = Report {
            tests: vec![named(
                "outer",
                vec![named("mid", vec![named("leaf", vec![])])],
            )],
            ..Report::default()
        };

        let flat = flatten(&report);
        assert_eq!(flat.len(), 3);
        assert_eq!(flat[0].parent, "");
        assert_eq!(flat[1].parent, "outer");
        assert_eq!(flat[2].parent, "mid");
    }

    #[test]
    fn sibling_subtrees_do_not_leak_parents() {
        let report = Report {
            tests: vec![named(
                "root",
                vec![
                    named("a", vec![named("a0", vec![])]),
                    named("b", vec![]),
                ],
            )],
            ..Report::default()
        };

        let flat = flatten(&report);
        let pairs: Vec<(&str, &str)> = flat
            .iter()
            .map(|f| (f.test.name.as_str(), f.parent))
            .collect();
        assert_eq!(
            pairs,
            vec![("root", ""), ("a", "root"), ("a0", "a"), ("b", "root")]
        );
    }
}
