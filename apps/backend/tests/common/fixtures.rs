//! Test fixtures and factory functions for creating problem files.

/// Build markdown with a full front-matter block.
pub fn problem_md(
    number: u32,
    title: &str,
    difficulty: &str,
    tags: &[&str],
    date: &str,
    body: &str,
) -> String {
    let tags = tags
        .iter()
        .map(|t| format!("\"{}\"", t))
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "---\ntitle: \"{title}\"\nnumber: {number}\ndifficulty: \"{difficulty}\"\ntags: [{tags}]\ndate: \"{date}\"\nurl: \"https://leetcode.com/problems/{number}/\"\n---\n\n# {number}. {title}\n\n{body}\n"
    )
}

/// A small mixed collection:
///
/// | slug                              | number | difficulty | date       |
/// |-----------------------------------|--------|------------|------------|
/// | scratch                           | -      | Unknown    | -          |
/// | 1-two-sum                         | 1      | Easy       | 2024-01-01 |
/// | 42-trapping-rain-water            | 42     | Hard       | 2024-01-02 |
/// | 124-binary-tree-maximum-path-sum  | 124    | Hard       | 2024-01-04 |
/// | 208-implement-trie-prefix-tree    | 208    | Medium     | 2024-01-05 |
/// | 15-3sum                           | 15     | Medium     | 2024-01-03 |
///
/// Listed in load order.
pub fn sample_collection() -> Vec<(String, String)> {
    vec![
        (
            "scratch.md".to_string(),
            "Some notes on a graph problem.".to_string(),
        ),
        (
            "Array/0001-two-sum.md".to_string(),
            problem_md(
                1,
                "Two Sum",
                "Easy",
                &["Array", "Hash Table"],
                "2024-01-01",
                "Store each value's index in a **hash map**.",
            ),
        ),
        (
            "Array/0042-trapping-rain-water.md".to_string(),
            problem_md(
                42,
                "Trapping Rain Water",
                "Hard",
                &["Array", "Two Pointers", "Stack"],
                "2024-01-02",
                "Walk inwards keeping the max height on each side.",
            ),
        ),
        (
            "Trees/0124-binary-tree-maximum-path-sum.md".to_string(),
            problem_md(
                124,
                "Binary Tree Maximum Path Sum",
                "Hard",
                &["Tree", "Dynamic Programming"],
                "2024-01-04",
                "Post-order traversal returning the best single branch.",
            ),
        ),
        (
            "Tries/0208-implement-trie.md".to_string(),
            problem_md(
                208,
                "Implement Trie (Prefix Tree)",
                "Medium",
                &["Trie", "Design"],
                "2024-01-05",
                "Children array of 26 per node.",
            ),
        ),
        (
            "TwoPointers/0015-3sum.md".to_string(),
            problem_md(
                15,
                "3Sum",
                "Medium",
                &["Array", "Two Pointers", "Sorting"],
                "2024-01-03",
                "Sort, then fix one element and scan with two pointers.",
            ),
        ),
    ]
}

/// `count` numbered Easy problems at the collection root.
pub fn numbered_collection(count: u32) -> Vec<(String, String)> {
    (1..=count)
        .map(|n| {
            (
                format!("{:04}-problem-{}.md", n, n),
                problem_md(n, &format!("Problem {}", n), "Easy", &["Array"], "2024-02-01", "Notes."),
            )
        })
        .collect()
}
