// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_mentor_turn(sections: usize) -> String {
    let base = "[CONCEPT title=\"Topic\"]\nSome *bold* and _italic_ prose about the topic.\n| A | B |\n|---|---|\n| 1 | 2 |\n| 3 | 4 |\nClosing remark.\n[MCQ]\nWhich *option* is right?\nA. one\nB. two\n[FEEDBACK_WRONG]\nNot quite, *_try again_*.\n[CONCEPT_TABLE]\nTerm | Meaning\nX | Y\n";
    base.repeat(sections)
}
