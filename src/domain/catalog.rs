/// Static case-file catalog.
///
/// Every puzzle screen is data, not code: one `CaseFile` descriptor per
/// level holding the display content, the notification copy, and the
/// expected answer. The renderer dispatches on the level index into this
/// table instead of branching per level.
///
/// Two game variants exist (the short 4-case game and the full 7-case
/// game); the short one is a prefix of the full catalog, so a single
/// table serves both.

/// Which edition of the investigation to run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Variant {
    Four,
    Seven,
}

impl Variant {
    pub fn level_count(self) -> usize {
        match self {
            Variant::Four => 4,
            Variant::Seven => 7,
        }
    }

    /// Accepts the config spellings: "four"/"4"/"short", "seven"/"7"/"full".
    pub fn parse(s: &str) -> Option<Variant> {
        match s.trim().to_ascii_lowercase().as_str() {
            "four" | "4" | "short" => Some(Variant::Four),
            "seven" | "7" | "full" => Some(Variant::Seven),
            _ => None,
        }
    }
}

/// A titled static text block inside a case file.
pub struct Exhibit {
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

/// Suspect profile, browsable on the social-graph level.
pub struct Dossier {
    pub name: &'static str,
    pub connections: &'static str,
    pub relation: &'static str,
    pub alibi: &'static str,
}

pub struct CaseFile {
    /// Short caption for the tab strip ("Linked List", "Hashing", ...).
    pub topic: &'static str,
    pub headline: &'static str,
    pub subtitle: &'static str,
    /// Evidence-log banner ("EVIDENCE LOG #001").
    pub log_tag: &'static str,
    pub briefing: &'static [&'static str],
    pub exhibits: &'static [Exhibit],
    /// Investigation notes, hidden once the level is solved.
    pub hints: &'static [&'static str],
    pub solved_note: &'static str,
    pub input_label: &'static str,
    pub submit_label: &'static str,
    pub busy_label: &'static str,
    pub success_title: &'static str,
    pub success_note: &'static str,
    pub failure_title: &'static str,
    pub failure_note: &'static str,
    pub answer: &'static str,
    /// Longer cosmetic processing delay for the dramatic levels.
    pub dramatic: bool,
    pub dossiers: &'static [Dossier],
}

/// Case files for the given variant. The short variant is the prefix of
/// the full table, so its final case is the impostor arrest (level 4).
pub fn case_files(variant: Variant) -> &'static [CaseFile] {
    &CASE_FILES[..variant.level_count()]
}

/// Expected answers in level order, for the sequencer's answer key.
pub fn answer_key(variant: Variant) -> Vec<String> {
    case_files(variant).iter().map(|c| c.answer.to_string()).collect()
}

/// The name revealed on the victory screen.
pub const IMPOSTOR: &str = "ARJUN";

// ══════════════════════════════════════════════════════════════
// The catalog
// ══════════════════════════════════════════════════════════════

static CASE_FILES: [CaseFile; 7] = [
    // ── 1: Caesar cipher ──
    CaseFile {
        topic: "Linked List",
        headline: "LEVEL 1: LINKED LIST",
        subtitle: "Data Structure Investigation",
        log_tag: "EVIDENCE LOG #001",
        briefing: &[
            "A suspicious data structure has been discovered at the crime",
            "scene. The impostor has left behind an encrypted message using",
            "a simple Caesar cipher. Decode the message to identify the",
            "data structure used in their alibi.",
        ],
        exhibits: &[Exhibit {
            title: "Intercepted Message",
            lines: &[
                "        O L Q N H G   O L V W        ",
                "",
                "> Shift cipher detected. Key analysis required.",
            ],
        }],
        hints: &[
            "> Caesar cipher shift pattern detected",
            "> Try shifting each letter backwards in the alphabet",
            "> Focus on common data structure terminology",
            "> Answer format: TWO WORDS (data structure name)",
        ],
        solved_note: "Cipher decoded: OLQNHG OLVW -> LINKED LIST (Caesar cipher, shift of 3)",
        input_label: "Enter the decoded message:",
        submit_label: "SUBMIT EVIDENCE",
        busy_label: "PROCESSING...",
        success_title: "Level 1 Complete!",
        success_note: "Cipher decoded successfully. Next level unlocked.",
        failure_title: "Incorrect Answer",
        failure_note: "The cipher remains unsolved. Try again.",
        answer: "LINKED LIST",
        dramatic: false,
        dossiers: &[],
    },
    // ── 2: Hash table ──
    CaseFile {
        topic: "Hashing",
        headline: "LEVEL 2: HASHING",
        subtitle: "Cryptographic Evidence Analysis",
        log_tag: "EVIDENCE LOG #002",
        briefing: &[
            "The impostor's digital fingerprints have been discovered in",
            "the ship's database system. They used a specific data",
            "structure for rapid lookups and storage. Analyze the evidence",
            "to identify the data structure.",
        ],
        exhibits: &[
            Exhibit {
                title: "Database Access Log",
                lines: &[
                    "$ system_analysis --data-structures",
                    "[INFO] Analyzing access patterns...",
                    "> O(1) average lookup time detected",
                    "> Key-value pair storage system identified",
                    "> Hash function collision handling present",
                    "> Bucket-based organization confirmed",
                ],
            },
            Exhibit {
                title: "Suspicious Code Fragment",
                lines: &[
                    "function suspiciousLookup(key) {",
                    "  const index = hashFunction(key) % buckets.length;",
                    "  return buckets[index].find(item => item.key === key);",
                    "}",
                ],
            },
            Exhibit {
                title: "Performance Profile",
                lines: &[
                    "+ O(1) average insertion",
                    "+ O(1) average retrieval",
                    "+ O(1) average deletion",
                    "! O(n) worst case (collisions)",
                ],
            },
        ],
        hints: &[
            "> Data structure optimized for key-based lookups",
            "> Uses mathematical function for index calculation",
            "> Common in database implementations and caches",
            "> Answer format: TWO WORDS (data structure name)",
        ],
        solved_note: "Data structure identified: HASH TABLE - Used for O(1) key-value operations",
        input_label: "Identify the data structure:",
        submit_label: "SUBMIT ANALYSIS",
        busy_label: "ANALYZING...",
        success_title: "Level 2 Complete!",
        success_note: "Hash collision detected. Next level unlocked.",
        failure_title: "Access Denied",
        failure_note: "Hash verification failed. Recalculate and try again.",
        answer: "HASH TABLE",
        dramatic: false,
        dossiers: &[],
    },
    // ── 3: Merge sort ──
    CaseFile {
        topic: "Sorting",
        headline: "LEVEL 3: TIMELINE RECONSTRUCTION",
        subtitle: "Temporal data analysis required",
        log_tag: "EVIDENCE LOG #003",
        briefing: &[
            "Security footage timestamps from various ship locations have",
            "been scrambled. The impostor used a sophisticated sorting",
            "algorithm to organize their alibi timeline. Identify the",
            "algorithm used to reconstruct the evidence chronologically.",
        ],
        exhibits: &[
            Exhibit {
                title: "Raw Security Data (UNSORTED)",
                lines: &[
                    "23:45:12   Electrical    Red",
                    "23:42:08   Medbay        Blue",
                    "23:47:33   Navigation    Green",
                    "23:41:55   Security      Yellow",
                    "23:46:21   Reactor       Purple",
                    "23:43:17   Admin         Orange",
                    "23:44:09   Weapons       Pink",
                    "23:48:14   Shields       Cyan",
                ],
            },
            Exhibit {
                title: "Reconstructed Timeline (SORTED)",
                lines: &[
                    "23:41:55   Security      Yellow",
                    "23:42:08   Medbay        Blue",
                    "23:43:17   Admin         Orange",
                    "23:44:09   Weapons       Pink",
                    "23:45:12   Electrical    Red",
                    "23:46:21   Reactor       Purple",
                    "23:47:33   Navigation    Green",
                    "23:48:14   Shields       Cyan",
                ],
            },
            Exhibit {
                title: "Algorithm Footprint Analysis",
                lines: &[
                    "$ forensics_analyzer --trace-algorithm",
                    "[INFO] Analyzing sorting pattern...",
                    "> Divide-and-conquer approach detected",
                    "> Recursive partitioning observed",
                    "> O(n log n) time complexity confirmed",
                    "> Stable sorting behavior identified",
                    "> Memory usage: O(n) auxiliary space",
                ],
            },
        ],
        hints: &[
            "> Classic divide-and-conquer sorting algorithm",
            "> Splits data in half recursively",
            "> Merges sorted halves back together",
            "> Answer format: TWO WORDS (algorithm name)",
        ],
        solved_note: "Algorithm identified: MERGE SORT - Divide-and-conquer with O(n log n) complexity",
        input_label: "Sorting Algorithm:",
        submit_label: "SUBMIT TIMELINE",
        busy_label: "RECONSTRUCTING...",
        success_title: "Level 3 Complete!",
        success_note: "Timeline reconstructed! Moving to next level...",
        failure_title: "Incorrect Algorithm",
        failure_note: "Review the sorting pattern.",
        answer: "MERGE SORT",
        dramatic: false,
        dossiers: &[],
    },
    // ── 4: Social graph / the arrest ──
    CaseFile {
        topic: "Graph",
        headline: "LEVEL 4: GRAPH THEORY",
        subtitle: "Social Network Analysis",
        log_tag: "EVIDENCE LOG #004",
        briefing: &[
            "Analyze the social network graph of all crewmates aboard the",
            "ship. Cross-reference their alibis with their connections and",
            "movement patterns. One person's alibi doesn't match their",
            "claimed location. Find the impostor!",
        ],
        exhibits: &[
            Exhibit {
                title: "Social Network Graph (5 nodes, 6 edges)",
                lines: &[
                    "   MAYA ─────────── ARJUN (!)",
                    "    │              ╱    │",
                    "    │          ROHIT    │",
                    "    │         ╱     ╲   │",
                    "   PRIYA ────╯       KAVYA",
                    "",
                    "<- / -> : browse suspect dossiers",
                ],
            },
            Exhibit {
                title: "Alibi Verification",
                lines: &[
                    "+ MAYA:  Cafeteria confirmed",
                    "+ PRIYA: Medbay with witnesses",
                    "+ ROHIT: Admin on security footage",
                    "+ KAVYA: Navigation verified",
                    "x ARJUN: Electrical claim unverified",
                ],
            },
        ],
        hints: &[
            "> Cross-reference movement patterns with relationships",
            "> One person has access to restricted areas",
            "> Their alibi timing doesn't match security footage",
            "> Focus on who had opportunity AND motive",
        ],
        solved_note: "IMPOSTOR IDENTIFIED: ARJUN - inconsistent alibi and suspicious access patterns",
        input_label: "Who is the impostor? (Enter the name of the guilty crewmate)",
        submit_label: "ARREST IMPOSTOR",
        busy_label: "APPREHENDING SUSPECT...",
        success_title: "CASE SOLVED!",
        success_note: "Impostor identified!",
        failure_title: "Incorrect Suspect",
        failure_note: "Graph analysis incomplete. Review the connections.",
        answer: "ARJUN",
        dramatic: true,
        dossiers: &[
            Dossier {
                name: "MAYA",
                connections: "ARJUN, PRIYA",
                relation: "Sister of Arjun, Friend of Priya",
                alibi: "Was in Cafeteria during incident",
            },
            Dossier {
                name: "ARJUN",
                connections: "MAYA, ROHIT, KAVYA",
                relation: "Brother of Maya, Friend of Rohit and Kavya",
                alibi: "Claims to be in Electrical - SUSPICIOUS TIMING",
            },
            Dossier {
                name: "PRIYA",
                connections: "MAYA, ROHIT",
                relation: "Friend of Maya and Rohit",
                alibi: "Confirmed in Medbay with witnesses",
            },
            Dossier {
                name: "ROHIT",
                connections: "ARJUN, PRIYA, KAVYA",
                relation: "Friend of Arjun, Priya, and Kavya",
                alibi: "Security footage confirms Admin location",
            },
            Dossier {
                name: "KAVYA",
                connections: "ARJUN, ROHIT",
                relation: "Friend of Arjun and Rohit",
                alibi: "Multiple witnesses confirm Navigation presence",
            },
        ],
    },
    // ── 5: Binary search tree ──
    CaseFile {
        topic: "BST",
        headline: "LEVEL 5: DATA STRUCTURE ANALYSIS",
        subtitle: "Tree topology investigation required",
        log_tag: "EVIDENCE LOG #005",
        briefing: &[
            "The security system uses a hierarchical data structure for",
            "fast lookups. Identify the specific tree type based on its",
            "ordering properties.",
        ],
        exhibits: &[
            Exhibit {
                title: "Security Database Structure",
                lines: &[
                    "          50",
                    "        ╱    ╲",
                    "      30      70",
                    "     ╱  ╲    ╱  ╲",
                    "    20   40 60   80",
                ],
            },
            Exhibit {
                title: "Properties Detected",
                lines: &[
                    "All left children < parent node",
                    "All right children > parent node",
                    "O(log n) search capability",
                    "Recursive structure maintained",
                ],
            },
        ],
        hints: &[
            "> Ordered binary tree with a search invariant",
            "> Answer format: THREE WORDS (tree structure type)",
        ],
        solved_note: "Structure classified: BINARY SEARCH TREE - ordered for O(log n) lookups",
        input_label: "Data Structure Name:",
        submit_label: "SUBMIT ANALYSIS",
        busy_label: "ANALYZING...",
        success_title: "Level 5 Complete!",
        success_note: "Tree structure identified! Moving to next evidence...",
        failure_title: "Incorrect Data Structure",
        failure_note: "Analyze the tree properties again.",
        answer: "BINARY SEARCH TREE",
        dramatic: false,
        dossiers: &[],
    },
    // ── 6: Shortest path ──
    CaseFile {
        topic: "Pathfinding",
        headline: "LEVEL 6: ESCAPE ROUTE ANALYSIS",
        subtitle: "Emergency pathfinding system compromised",
        log_tag: "EVIDENCE LOG #006",
        briefing: &[
            "The station layout has been recovered. Emergency exit E must",
            "be reached from point A via the shortest path. Identify the",
            "algorithm the impostor's escape planner runs.",
        ],
        exhibits: &[
            Exhibit {
                title: "Navigation Network",
                lines: &[
                    "    (A)────4────(B)",
                    "      ╲        ╱  ╲",
                    "       2      1    5",
                    "        ╲    ╱      ╲",
                    "         (C)────8────(D)",
                    "           ╲          ╱",
                    "            10       2",
                    "              ╲     ╱",
                    "               (E)─╯",
                ],
            },
            Exhibit {
                title: "Distance Matrix",
                lines: &[
                    "A->B: 4, A->C: 2",
                    "B->C: 1, B->D: 5",
                    "C->D: 8, C->E: 10",
                    "D->E: 2",
                ],
            },
            Exhibit {
                title: "Algorithm Signature",
                lines: &[
                    "* Greedy approach for shortest paths",
                    "* Works with weighted graphs",
                    "* Named after a Dutch computer scientist",
                    "* Uses priority queue for efficiency",
                ],
            },
        ],
        hints: &[
            "> Single-source shortest path on non-negative weights",
            "> Answer format: ONE WORD (the scientist's name)",
        ],
        solved_note: "Algorithm identified: DIJKSTRA - greedy shortest path over weighted edges",
        input_label: "Pathfinding Algorithm:",
        submit_label: "SUBMIT ANALYSIS",
        busy_label: "PROCESSING...",
        success_title: "Level 6 Complete!",
        success_note: "Pathfinding algorithm identified! Final level unlocked...",
        failure_title: "Incorrect Algorithm",
        failure_note: "Review the shortest path requirements.",
        answer: "DIJKSTRA",
        dramatic: false,
        dossiers: &[],
    },
    // ── 7: Dynamic programming ──
    CaseFile {
        topic: "DP",
        headline: "LEVEL 7: FINAL EVIDENCE",
        subtitle: "The impostor's optimization strategy revealed",
        log_tag: "FINAL EVIDENCE LOG #007",
        briefing: &[
            "The impostor used an algorithmic approach to efficiently plan",
            "their sabotage, breaking complex problems into smaller",
            "subproblems and storing solutions to avoid recomputation.",
            "What is this optimization technique called?",
        ],
        exhibits: &[
            Exhibit {
                title: "Pattern Recognition",
                lines: &[
                    "F(0) = 0, F(1) = 1",
                    "F(n) = F(n-1) + F(n-2)",
                    "",
                    "Sequence: 0, 1, 1, 2, 3, 5, 8, 13, 21, 34, 55, 89",
                ],
            },
            Exhibit {
                title: "Resource Optimization",
                lines: &[
                    "Capacity: 50kg",
                    "Emergency Kit: 10kg, Value: 60",
                    "Food Supply:   20kg, Value: 100",
                    "Medical Pack:  30kg, Value: 120",
                ],
            },
            Exhibit {
                title: "Technique Identified",
                lines: &[
                    "* Breaks complex problems into smaller subproblems",
                    "* Stores solutions to avoid recomputation",
                    "* Uses memoization or tabulation",
                    "* Optimal for overlapping subproblems",
                ],
            },
        ],
        hints: &[
            "> Overlapping subproblems plus optimal substructure",
            "> Answer format: TWO WORDS (the technique)",
        ],
        solved_note: "Technique exposed: DYNAMIC PROGRAMMING - the impostor's sabotage planner",
        input_label: "Optimization Technique:",
        submit_label: "CLOSE THE CASE",
        busy_label: "FINALIZING CASE...",
        success_title: "CASE SOLVED!",
        success_note: "The impostor's method has been exposed!",
        failure_title: "Incorrect Approach",
        failure_note: "The optimization technique is key.",
        answer: "DYNAMIC PROGRAMMING",
        dramatic: true,
        dossiers: &[],
    },
];

// ══════════════════════════════════════════════════════════════
// Unit tests
// ══════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_level_counts() {
        assert_eq!(case_files(Variant::Four).len(), 4);
        assert_eq!(case_files(Variant::Seven).len(), 7);
    }

    #[test]
    fn short_variant_answer_key() {
        assert_eq!(
            answer_key(Variant::Four),
            vec!["LINKED LIST", "HASH TABLE", "MERGE SORT", "ARJUN"],
        );
    }

    #[test]
    fn full_variant_extends_the_short_one() {
        let four = answer_key(Variant::Four);
        let seven = answer_key(Variant::Seven);
        assert_eq!(&seven[..4], &four[..]);
        assert_eq!(
            &seven[4..],
            &["BINARY SEARCH TREE", "DIJKSTRA", "DYNAMIC PROGRAMMING"],
        );
    }

    #[test]
    fn variant_parsing() {
        assert_eq!(Variant::parse("four"), Some(Variant::Four));
        assert_eq!(Variant::parse(" 7 "), Some(Variant::Seven));
        assert_eq!(Variant::parse("FULL"), Some(Variant::Seven));
        assert_eq!(Variant::parse("short"), Some(Variant::Four));
        assert_eq!(Variant::parse("nine"), None);
    }

    #[test]
    fn every_case_is_presentable() {
        for case in case_files(Variant::Seven) {
            assert!(!case.topic.is_empty());
            assert!(!case.briefing.is_empty());
            assert!(!case.answer.is_empty());
            assert!(!case.exhibits.is_empty());
        }
    }

    #[test]
    fn only_the_graph_level_has_dossiers() {
        for (i, case) in case_files(Variant::Seven).iter().enumerate() {
            if i == 3 {
                assert_eq!(case.dossiers.len(), 5);
            } else {
                assert!(case.dossiers.is_empty());
            }
        }
    }
}
