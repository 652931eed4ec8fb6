//! Offline topic catalog: the fixed fact-sheets served when the remote model is
//! unavailable.
//!
//! Table order is resolution priority: a question mentioning two keywords
//! resolves to whichever comes first here.

/// Header label for the key-points section, picked by which slot is filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyPointKind {
    Types,
    Concepts,
    Functions,
}

impl KeyPointKind {
    pub fn label(self) -> &'static str {
        match self {
            KeyPointKind::Types => "KEY TYPES",
            KeyPointKind::Concepts => "KEY CONCEPTS",
            KeyPointKind::Functions => "KEY FUNCTIONS",
        }
    }
}

/// One known subject area. Empty key-point slots count as absent; an entry
/// with all three empty renders without a key-points section.
#[derive(Debug)]
pub struct TopicEntry {
    pub keyword: &'static str,
    pub definition: &'static str,
    pub mnemonic: Option<&'static str>,
    pub types: &'static [&'static str],
    pub concepts: &'static [&'static str],
    pub functions: &'static [&'static str],
    pub memory_tip: Option<&'static str>,
    pub advantages: [&'static str; 4],
    pub applications: [&'static str; 3],
    pub exam_tip: Option<&'static str>,
}

impl TopicEntry {
    /// First non-empty slot in priority order: types, concepts, functions.
    pub fn key_points(&self) -> Option<(KeyPointKind, &'static [&'static str])> {
        [
            (KeyPointKind::Types, self.types),
            (KeyPointKind::Concepts, self.concepts),
            (KeyPointKind::Functions, self.functions),
        ]
        .into_iter()
        .find(|(_, items)| !items.is_empty())
    }
}

pub static TOPICS: [TopicEntry; 5] = [
    TopicEntry {
        keyword: "data structure",
        definition: "A data structure is a specialized format for organizing, processing, storing, and retrieving data efficiently.",
        mnemonic: Some("DASA - Data, Access, Store, Arrange"),
        types: &[
            "Arrays (Fixed size)",
            "Linked Lists (Dynamic)",
            "Stacks (LIFO)",
            "Queues (FIFO)",
            "Trees (Hierarchical)",
            "Graphs (Networks)",
        ],
        concepts: &[],
        functions: &[],
        memory_tip: Some("Remember ALSTG: Arrays, Lists, Stacks, Trees, Graphs"),
        advantages: [
            "Fast access O(1)",
            "Efficient storage",
            "Easy manipulation",
            "Code reusability",
        ],
        applications: ["Database indexing", "OS memory management", "Compiler design"],
        exam_tip: Some("Always draw diagram for stacks/queues. Mention time complexity."),
    },
    TopicEntry {
        keyword: "algorithm",
        definition: "An algorithm is a step-by-step procedure to solve a problem with finite steps.",
        mnemonic: Some("FIUDA - Finite, Input, Unambiguous, Definite, Achievable"),
        types: &[
            "Sorting (arrange data)",
            "Searching (find data)",
            "Graph (path finding)",
            "Dynamic (optimal solutions)",
        ],
        concepts: &[],
        functions: &[],
        memory_tip: Some("Remember SSGD: Sort, Search, Graph, Dynamic"),
        advantages: [
            "Systematic approach",
            "Reusable code",
            "Analyzable performance",
            "Language independent",
        ],
        applications: ["Google search", "GPS navigation", "Social media feeds"],
        exam_tip: Some("Always mention time/space complexity. Draw flowchart if asked."),
    },
    TopicEntry {
        keyword: "oops",
        definition: "Object-Oriented Programming organizes code around objects containing data and methods.",
        mnemonic: Some("APIE - Abstraction, Polymorphism, Inheritance, Encapsulation"),
        types: &[],
        concepts: &[
            "Encapsulation: Data hiding (Private variables)",
            "Inheritance: Code reuse (Parent-Child)",
            "Polymorphism: Many forms (Overloading/Overriding)",
            "Abstraction: Hide complexity (Abstract classes)",
        ],
        functions: &[],
        memory_tip: Some("Remember APIE like apple pie - sweet and easy!"),
        advantages: [
            "Code reusability",
            "Easy maintenance",
            "Data security",
            "Real-world modeling",
        ],
        applications: ["Java applications", "Game development", "GUI design"],
        exam_tip: Some("Give real-world example like Car class with properties."),
    },
    TopicEntry {
        keyword: "dbms",
        definition: "Database Management System is software to create, manage, and manipulate databases.",
        mnemonic: Some("ACID - Atomicity, Consistency, Isolation, Durability"),
        types: &[],
        concepts: &[],
        functions: &[],
        memory_tip: Some("Remember ACID for transactions - it's battery acid!"),
        advantages: [
            "Reduced redundancy",
            "Data integrity",
            "Multi-user access",
            "Backup/recovery",
        ],
        applications: ["Banking systems", "E-commerce", "Airlines booking"],
        exam_tip: Some("Draw ER diagram for 8+ marks. Explain ACID with examples."),
    },
    TopicEntry {
        keyword: "operating system",
        definition: "OS is system software managing hardware and providing services to applications.",
        mnemonic: Some("PMFI - Process, Memory, File, I/O management"),
        types: &["Batch OS", "Time-sharing OS", "Distributed OS", "Real-time OS"],
        concepts: &[],
        functions: &[
            "Process Management (CPU scheduling)",
            "Memory Management (RAM allocation)",
            "File Management (Storage organization)",
            "I/O Management (Device control)",
        ],
        memory_tip: Some("Remember PMFI like 'PM for India' - manages everything!"),
        advantages: [
            "Efficient resource utilization",
            "User convenience",
            "Security & protection",
            "Multitasking support",
        ],
        applications: ["Windows", "Linux", "MacOS"],
        exam_tip: Some("Draw process states diagram. Explain scheduling algorithms."),
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_keywords_are_lowercase_and_unique() {
        let mut seen = HashSet::new();
        for topic in TOPICS.iter() {
            assert_eq!(topic.keyword, topic.keyword.to_lowercase());
            assert!(seen.insert(topic.keyword), "duplicate keyword {}", topic.keyword);
        }
    }

    #[test]
    fn test_only_dbms_lacks_key_points() {
        for topic in TOPICS.iter() {
            assert_eq!(
                topic.key_points().is_none(),
                topic.keyword == "dbms",
                "unexpected key points for {}",
                topic.keyword
            );
        }
    }

    #[test]
    fn test_types_win_over_functions() {
        // "operating system" fills both slots; types has priority
        let os = TOPICS.iter().find(|t| t.keyword == "operating system").unwrap();
        let (kind, items) = os.key_points().unwrap();
        assert_eq!(kind, KeyPointKind::Types);
        assert_eq!(items[0], "Batch OS");
    }

    #[test]
    fn test_key_point_labels() {
        let oops = TOPICS.iter().find(|t| t.keyword == "oops").unwrap();
        assert_eq!(oops.key_points().unwrap().0.label(), "KEY CONCEPTS");
    }
}
