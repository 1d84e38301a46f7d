//! Regexp samples: pattern, inputs that must match, inputs that must not,
//! and whether the pattern is valid at all.

#[derive(Debug)]
pub struct RegexpSample {
    pub regex: &'static str,
    pub matches: &'static [&'static str],
    pub nomatches: &'static [&'static str],
    pub valid: bool,
}

pub static REGEXP_SAMPLES: &[RegexpSample] = &[
    // Sample 1
    RegexpSample {
        regex: "a",
        matches: &["a"],
        nomatches: &["", "aa", "b"],
        valid: true,
    },
    // Sample 2
    RegexpSample {
        regex: "a?",
        matches: &["", "a"],
        nomatches: &["aa", "b"],
        valid: true,
    },
    // Sample 3
    RegexpSample {
        regex: "a*",
        matches: &["", "a", "aaaa"],
        nomatches: &["b", "ab"],
        valid: true,
    },
    // Sample 4
    RegexpSample {
        regex: "a+",
        matches: &["a", "aa", "aaa"],
        nomatches: &["", "b", "ab"],
        valid: true,
    },
    // Sample 5
    RegexpSample {
        regex: "[a-c]",
        matches: &["a", "b", "c"],
        nomatches: &["d", "", "ab"],
        valid: true,
    },
    // Sample 6
    RegexpSample {
        regex: "[^a-c]",
        matches: &["d", "z", "0"],
        nomatches: &["a", "b", "c", "", "dd"],
        valid: true,
    },
    // Sample 7
    RegexpSample {
        regex: "(ab|cd)",
        matches: &["ab", "cd"],
        nomatches: &["ac", "abcd", "", "a"],
        valid: true,
    },
    // Sample 8
    RegexpSample {
        regex: "\\d",
        matches: &["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"],
        nomatches: &["a", "", "00"],
        valid: true,
    },
    // Sample 9
    RegexpSample {
        regex: "([a-cd]*|az?)",
        matches: &["", "a", "d", "aa", "bcda", "az"],
        nomatches: &["e", "azz"],
        valid: true,
    },
    // Sample 10
    RegexpSample {
        regex: "\\D",
        matches: &["a", " "],
        nomatches: &["0", "9", ""],
        valid: true,
    },
    // Sample 11
    RegexpSample {
        regex: "\\s",
        matches: &[" "],
        nomatches: &["\t", "s", ""],
        valid: true,
    },
    // Sample 12
    RegexpSample {
        regex: "\\S",
        matches: &["a", "\t"],
        nomatches: &[" ", ""],
        valid: true,
    },
    // Sample 13
    RegexpSample {
        regex: "\\(",
        matches: &["("],
        nomatches: &["\\(", ""],
        valid: true,
    },
    // Sample 14
    RegexpSample {
        regex: "\\.",
        matches: &["."],
        nomatches: &["a"],
        valid: true,
    },
    // Sample 15
    RegexpSample {
        regex: ".",
        matches: &["a", "\n", "\u{7f}", "."],
        nomatches: &["", "ab"],
        valid: true,
    },
    // Sample 16
    RegexpSample {
        regex: "a.c",
        matches: &["abc", "a.c"],
        nomatches: &["ac", "abbc"],
        valid: true,
    },
    // Sample 17
    RegexpSample {
        regex: "a|b|c",
        matches: &["a", "b", "c"],
        nomatches: &["ab", ""],
        valid: true,
    },
    // Sample 18
    RegexpSample {
        regex: "(a|b)*c",
        matches: &["c", "ac", "abbac"],
        nomatches: &["", "ab", "ca"],
        valid: true,
    },
    // Sample 19
    RegexpSample {
        regex: "x(ab)+y",
        matches: &["xaby", "xababy"],
        nomatches: &["xy", "xabay"],
        valid: true,
    },
    // Sample 20
    RegexpSample {
        regex: "(a?)(b?)",
        matches: &["", "a", "b", "ab"],
        nomatches: &["ba", "aa"],
        valid: true,
    },
    // Sample 21
    RegexpSample {
        regex: "a|b?",
        matches: &["", "a", "b"],
        nomatches: &["ab", "bb"],
        valid: true,
    },
    // Sample 22
    RegexpSample {
        regex: "a**",
        matches: &["a*", "aaa*", "*"],
        nomatches: &["", "a", "**"],
        valid: true,
    },
    // Sample 23
    RegexpSample {
        regex: "|a",
        matches: &["|a"],
        nomatches: &["a", "|"],
        valid: true,
    },
    // Sample 24
    RegexpSample {
        regex: "(|a)",
        matches: &["|a"],
        nomatches: &["a", ""],
        valid: true,
    },
    // Sample 25
    RegexpSample {
        regex: "[.]",
        matches: &["."],
        nomatches: &["a"],
        valid: true,
    },
    // Sample 26
    RegexpSample {
        regex: "[a\\d]",
        matches: &["a", "7"],
        nomatches: &["b", "a7"],
        valid: true,
    },
    // Sample 27
    RegexpSample {
        regex: "[^\\d]",
        matches: &["x"],
        nomatches: &["5"],
        valid: true,
    },
    // Sample 28
    RegexpSample {
        regex: "[z-a]x",
        matches: &[],
        nomatches: &["x", "zx", "ax", ""],
        valid: true,
    },
    // Sample 29
    RegexpSample {
        regex: "(a*)*",
        matches: &["", "a", "aaa"],
        nomatches: &["b"],
        valid: true,
    },
    // Sample 30
    RegexpSample {
        regex: "(a+)?b",
        matches: &["b", "ab", "aab"],
        nomatches: &["a", ""],
        valid: true,
    },
    // Sample 31
    RegexpSample {
        regex: "[-a]",
        matches: &["-", "a"],
        nomatches: &["b", "-a"],
        valid: true,
    },
    // Sample 32
    RegexpSample {
        regex: "a-z",
        matches: &["a-z"],
        nomatches: &["b", "a"],
        valid: true,
    },
    // Sample 33
    RegexpSample {
        regex: "((a|b)c)*",
        matches: &["", "ac", "bcac"],
        nomatches: &["a", "acb"],
        valid: true,
    },
    // Sample 34
    RegexpSample {
        regex: "\\\\",
        matches: &["\\"],
        nomatches: &[""],
        valid: true,
    },
    // Sample 35
    RegexpSample {
        regex: "a^b",
        matches: &["a^b"],
        nomatches: &["ab"],
        valid: true,
    },
    // Sample 36
    RegexpSample {
        regex: "[^^]",
        matches: &["a"],
        nomatches: &["^"],
        valid: true,
    },
    // Sample 37
    RegexpSample {
        regex: "é",
        matches: &["é"],
        nomatches: &["e", ""],
        valid: true,
    },
    // Sample 38
    RegexpSample {
        regex: "(a*)+",
        matches: &["", "a", "aaa"],
        nomatches: &["b", "ab"],
        valid: true,
    },
    // Sample 39
    RegexpSample {
        regex: "(a?)+",
        matches: &["", "a", "aa"],
        nomatches: &["b"],
        valid: true,
    },
    // Sample 40
    RegexpSample {
        regex: "(a|b?)+",
        matches: &["", "a", "b", "abba"],
        nomatches: &["c", "abc"],
        valid: true,
    },
    // Sample 41
    RegexpSample {
        regex: "(a?b?)+c",
        matches: &["c", "ac", "bac", "abbc"],
        nomatches: &["", "a", "cc"],
        valid: true,
    },
    // Sample 42
    RegexpSample {
        regex: "",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 43
    RegexpSample {
        regex: "(a",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 44
    RegexpSample {
        regex: "a)",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 45
    RegexpSample {
        regex: "(a))",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 46
    RegexpSample {
        regex: "((a)",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 47
    RegexpSample {
        regex: "[a",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 48
    RegexpSample {
        regex: "()",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 49
    RegexpSample {
        regex: "[]",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 50
    RegexpSample {
        regex: "a]",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 51
    RegexpSample {
        regex: "a|",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 52
    RegexpSample {
        regex: "\\",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
    // Sample 53
    RegexpSample {
        regex: "[a-\\d]",
        matches: &[],
        nomatches: &[],
        valid: false,
    },
];
