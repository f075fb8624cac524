//! Tests for briefing through the command hierarchy

use rstest::{fixture, rstest};

use patternbook::domain::{
    brigade, division, enlisted, platoon, squad, Notifier, OrgNode, Transcript,
};

#[fixture]
fn first_division() -> OrgNode {
    let mut first = division("1st");
    let mut a = brigade("A");
    let mut one = platoon("1");
    let mut alpha = squad("alpha");
    alpha.add([enlisted("Smith"), enlisted("Jones")]);
    one.add([alpha]);
    a.add([one]);
    first.add([a]);
    first
}

fn brief(node: &OrgNode, order: &str) -> Vec<String> {
    let mut sink = Transcript::new();
    node.brief(order, &mut sink);
    sink.into_messages()
}

#[rstest]
fn given_first_division_when_briefed_then_emits_children_before_summaries(first_division: OrgNode) {
    assert_eq!(
        brief(&first_division, "Move out"),
        [
            "Move out",
            "Move out",
            "Briefing 2 Enlistees",
            "Briefing 1 Squads",
            "Briefing 1 Platoons",
            "Briefing 1 Brigades",
        ]
    );
}

#[rstest]
fn given_first_division_when_briefed_twice_then_output_repeats(first_division: OrgNode) {
    let first = brief(&first_division, "Hold");
    let second = brief(&first_division, "Hold");
    assert_eq!(first, second);
}

#[rstest]
#[case::division(division("x"), "Briefing 0 Brigades")]
#[case::brigade(brigade("x"), "Briefing 0 Platoons")]
#[case::platoon(platoon("x"), "Briefing 0 Squads")]
#[case::squad(squad("x"), "Briefing 0 Enlistees")]
fn given_empty_unit_when_briefed_then_reports_zero_subordinates(
    #[case] unit: OrgNode,
    #[case] expected: &str,
) {
    assert_eq!(brief(&unit, "Stand by"), [expected]);
}

#[test]
fn given_wide_tree_when_briefed_then_every_soldier_gets_the_literal_order() {
    let tree = division("2nd").with([
        brigade("A").with([
            platoon("1").with([
                squad("a").with([enlisted("1"), enlisted("2"), enlisted("3")]),
                squad("b").with([enlisted("4")]),
            ]),
            platoon("2"),
        ]),
        brigade("B").with([platoon("3").with([squad("c").with([enlisted("5")])])]),
    ]);

    let messages = brief(&tree, "Advance to the ridge");
    let orders = messages
        .iter()
        .filter(|m| *m == "Advance to the ridge")
        .count();

    assert_eq!(orders, tree.leaf_count());
    assert_eq!(orders, 5);
    assert_eq!(messages.last().map(String::as_str), Some("Briefing 2 Brigades"));
}

#[test]
fn given_siblings_when_briefed_then_follow_insertion_order() {
    let tree = platoon("1").with([
        squad("first").with([enlisted("a")]),
        squad("second").with([enlisted("b"), enlisted("c")]),
        squad("third"),
    ]);

    assert_eq!(
        brief(&tree, "Go"),
        [
            "Go",
            "Briefing 1 Enlistees",
            "Go",
            "Go",
            "Briefing 2 Enlistees",
            "Briefing 0 Enlistees",
            "Briefing 3 Squads",
        ]
    );
}

#[test]
fn given_enlisted_when_added_to_then_briefing_is_unchanged() {
    let mut soldier = enlisted("Smith");
    let before = brief(&soldier, "Fall in");

    soldier.add([enlisted("Ghost"), squad("phantom").with([enlisted("Ghost 2")])]);
    soldier.add(Vec::new());

    assert_eq!(brief(&soldier, "Fall in"), before);
    assert!(soldier.children().is_empty());
    assert_eq!(soldier.leaf_count(), 1);
}

#[test]
fn given_empty_order_when_briefed_then_soldiers_repeat_it_verbatim() {
    let tree = squad("quiet").with([enlisted("a")]);
    assert_eq!(brief(&tree, ""), ["", "Briefing 1 Enlistees"]);
}

/// Records only summaries, to check the sink is the single output channel.
#[derive(Default)]
struct SummaryOnly(Vec<String>);

impl Notifier for SummaryOnly {
    fn notify(&mut self, message: &str) {
        if message.starts_with("Briefing") {
            self.0.push(message.to_string());
        }
    }
}

#[rstest]
fn given_custom_sink_when_briefed_then_receives_all_notifications(first_division: OrgNode) {
    let mut sink = SummaryOnly::default();
    first_division.brief("Move out", &mut sink);
    assert_eq!(sink.0.len(), 4);
}
