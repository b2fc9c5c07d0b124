use cause_tree::{format_detailed, ErrorNode};

use crate::fixtures::{self, FRAME};

const MAIN_FRAME: &str = "at fixtures::main() in fixtures.rs:line 3";

#[test]
fn leaf_without_stack_is_root_with_kind() {
    let output = format_detailed(&fixtures::without_stack());
    assert_eq!(output, "[ROOT] [Exception] foo");
}

#[test]
fn leaf_with_stack_lists_frames_unindented() {
    let output = format_detailed(&fixtures::with_stack());
    assert_eq!(output, format!("[ROOT] [Exception] bar\n{FRAME}\n{MAIN_FRAME}"));
}

#[test]
fn inner_cause_without_stack() {
    let input = ErrorNode::new("Exception", "foo").with_cause(ErrorNode::new("ArgumentException", "bar"));

    assert_eq!(format_detailed(&input), "[Exception] foo\n\n   CAUSED BY: [ROOT] [ArgumentException] bar");
}

#[test]
fn inner_cause_stack_is_indented_one_level() {
    let input = ErrorNode::new("Exception", "foo").with_cause(fixtures::with_stack());

    assert_eq!(
        format_detailed(&input),
        format!("[Exception] foo\n\n   CAUSED BY: [ROOT] [Exception] bar\n   {FRAME}\n   {MAIN_FRAME}")
    );
}

#[test]
fn aggregate_numbers_each_cause() {
    let input = ErrorNode::aggregate(
        "AggregateException",
        "foo",
        [ErrorNode::new("Exception", "bar1"), ErrorNode::new("Exception", "bar2")],
    );

    assert_eq!(
        format_detailed(&input),
        "[AggregateException] foo\n\n   CAUSE #1: [ROOT] [Exception] bar1\n\n   CAUSE #2: [ROOT] [Exception] bar2"
    );
}

#[test]
fn aggregate_members_keep_their_own_chains_and_stacks() {
    let input = ErrorNode::aggregate(
        "AggregateException",
        "foo",
        [ErrorNode::new("Exception", "bar0").with_cause(fixtures::with_stack()), fixtures::with_stack()],
    );

    let expected = format!(
        "[AggregateException] foo\n\
         \n   CAUSE #1: [Exception] bar0\n\
         \n      CAUSED BY: [ROOT] [Exception] bar\n      {FRAME}\n      {MAIN_FRAME}\n\
         \n   CAUSE #2: [ROOT] [Exception] bar\n   {FRAME}\n   {MAIN_FRAME}"
    );
    assert_eq!(format_detailed(&input), expected);
}

#[test]
fn loader_lists_its_sub_errors_under_placeholder_message() {
    let output = format_detailed(&fixtures::wrapped_loader());

    let expected = format!(
        "[Exception] foo\n\
         \n   CAUSED BY: [ROOT] [TypeLoadException] Error of type 'TypeLoadException' was thrown.\n\
         \n      CAUSE #1: [ROOT] [Exception] foo\n\
         \n      CAUSE #2: [ROOT] [Exception] bar\n      {FRAME}\n      {MAIN_FRAME}"
    );
    assert_eq!(output, expected);
}

#[test]
fn top_level_loader_is_marked_root() {
    let input = ErrorNode::loader(
        "ReflectionTypeLoadException",
        [ErrorNode::new("Exception", "foo"), ErrorNode::new("Exception", "bar")],
    );

    assert_eq!(
        format_detailed(&input),
        "[ROOT] [ReflectionTypeLoadException] Error of type 'ReflectionTypeLoadException' was thrown.\n\
         \n   CAUSE #1: [ROOT] [Exception] foo\n\
         \n   CAUSE #2: [ROOT] [Exception] bar"
    );
}

#[test]
fn single_member_aggregate_is_still_numbered() {
    let input = ErrorNode::aggregate("AggregateException", "one", [ErrorNode::new("Exception", "only")]);

    assert_eq!(format_detailed(&input), "[AggregateException] one\n\n   CAUSE #1: [ROOT] [Exception] only");
}

#[test]
fn empty_aggregate_is_a_root_cause() {
    let input = ErrorNode::aggregate("AggregateException", "none", Vec::new());

    assert_eq!(format_detailed(&input), "[ROOT] [AggregateException] none");
}

#[test]
fn nested_aggregates_number_siblings_per_level() {
    let input = ErrorNode::aggregate(
        "Batch",
        "top",
        [
            ErrorNode::aggregate("Batch", "left", [ErrorNode::new("E", "l1"), ErrorNode::new("E", "l2")]),
            ErrorNode::aggregate("Batch", "right", [ErrorNode::new("E", "r1")]),
            ErrorNode::new("E", "tail"),
        ],
    );

    let output = format_detailed(&input);
    assert_eq!(
        output,
        "[Batch] top\
         \n\n   CAUSE #1: [Batch] left\
         \n\n      CAUSE #1: [ROOT] [E] l1\
         \n\n      CAUSE #2: [ROOT] [E] l2\
         \n\n   CAUSE #2: [Batch] right\
         \n\n      CAUSE #1: [ROOT] [E] r1\
         \n\n   CAUSE #3: [ROOT] [E] tail"
    );
}

#[test]
fn chain_indents_traces_by_depth() {
    let output = format_detailed(&fixtures::chain_of_three());

    assert_eq!(
        output,
        "[A] first\nat a()\
         \n\n   CAUSED BY: [B] second\n   at b()\
         \n\n      CAUSED BY: [ROOT] [C] third\n      at c()"
    );

    for (depth, frame) in ["at a()", "at b()", "at c()"].iter().enumerate() {
        let line = output.lines().find(|l| l.trim_start() == *frame).unwrap();
        let indent = line.len() - line.trim_start().len();
        assert_eq!(indent, depth * 3, "frame {frame}");
    }
}

#[test]
fn crlf_trace_lines_are_split() {
    let input = ErrorNode::new("Exception", "bar").with_trace("at a()\r\nat b()");

    assert_eq!(format_detailed(&input), "[ROOT] [Exception] bar\nat a()\nat b()");
}

#[test]
fn empty_trace_emits_no_lines() {
    let input = ErrorNode::new("Exception", "bar").with_trace("");

    assert_eq!(format_detailed(&input), "[ROOT] [Exception] bar");
}

#[test]
fn input_is_left_untouched() {
    let input = fixtures::wrapped_loader();
    let before = input.clone();

    let first = format_detailed(&input);
    let second = format_detailed(&input);

    assert_eq!(input, before);
    assert_eq!(first, second);
}
