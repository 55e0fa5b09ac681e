use sciv_core::{SciVersion, SegmentId};

use crate::register::Reg;
use crate::workaround::CallOrigin;

use super::*;

fn ptr(segment: u16, offset: u32) -> Reg {
    Reg::new(SegmentId::new(segment), offset)
}

#[test]
fn type_mismatch_message() {
    let ctx = RegContext::standalone(SciVersion::Sci11);
    let err = ctx.mul(ptr(5, 10), Reg::number(3)).unwrap_err();

    insta::assert_snapshot!(err, @"invalid arithmetic operation (multiplication - params: 0005:000a and 0000:0003) from <unknown origin>");
}

#[test]
fn incompatible_comparison_message() {
    let origin = CallOrigin::new("sq4", 1, 928).method("Narrator", "startText");
    let ctx = RegContext::standalone(SciVersion::Sci1Late).with_origin(origin);
    let err = ctx.gt(ptr(5, 10), Reg::number(3)).unwrap_err();

    insta::assert_snapshot!(err, @"incompatible comparison (params: 0005:000a and 0000:0003) from Narrator::startText (game sq4, room 1, script 928)");
}

#[test]
fn division_by_zero_message() {
    let ctx = RegContext::standalone(SciVersion::Sci11);
    let err = ctx.rem(Reg::number(7), Reg::NULL).unwrap_err();

    insta::assert_snapshot!(err, @"modulo by zero (params: 0000:0007 and 0000:0000) from <unknown origin>");
}

#[test]
fn uninitialized_message() {
    let origin = CallOrigin::new("lsl6", 100, 0)
        .method("rm100", "init")
        .local_call(0x1a);
    let ctx = RegContext::standalone(SciVersion::Sci11).with_origin(origin);
    let err = ctx.add(Reg::Uninitialized, Reg::TRUE).unwrap_err();

    insta::assert_snapshot!(err, @"uninitialized register read during addition from rm100::init (game lsl6, room 100, script 0, local call 001a)");
}

#[test]
fn dangling_pointer_message() {
    let ctx = RegContext::standalone(SciVersion::Sci11);
    let err = ctx.add(ptr(0x40, 0x12), Reg::TRUE).unwrap_err();

    insta::assert_snapshot!(err, @"addition on dangling pointer 0040:0012 from <unknown origin>");
}

#[test]
fn require_message() {
    let err = ptr(3, 0x20).require_u16().unwrap_err();
    insta::assert_snapshot!(err, @"invalid arithmetic operation (require unsigned number - params: 0003:0020 and 0000:0000) from <unknown origin>");
}

#[test]
fn accessors() {
    let origin = CallOrigin::new("kq5", 7, 7);
    let ctx = RegContext::standalone(SciVersion::Sci11).with_origin(origin.clone());

    let err = ctx.gt(ptr(5, 0), Reg::NULL).unwrap_err();
    assert_eq!(err.operation(), Operation::Comparison);
    assert_eq!(err.origin(), &origin);

    let err = ctx.div(Reg::TRUE, Reg::NULL).unwrap_err();
    assert_eq!(err.operation(), Operation::Division);
}
