//! 一个可以直接运行的示例套件
//!
//! cargo run --example suite -- --verbose
//! cargo run --example suite -- '^strings/'
use clean_test::expression::{Compose, lift};
use clean_test::framework::Registry;
use std::process::ExitCode;

fn parse_port(raw: &str) -> anyhow::Result<u16> {
    Ok(raw.trim().parse()?)
}

fn main() -> ExitCode {
    let mut registry = Registry::new();

    registry.suite("numbers", |suite| {
        suite.test("arithmetic", |o| {
            o.expect(lift(17_i32).equals(17));
            o.expect(lift(2_i32 + 2).greater(3).and(lift(2_i32 + 2).less(5)));
        });
        suite.test("short_circuit", |o| {
            // 右侧不会被求值，失败信息中显示为 <unknown>
            o.expect(lift(1_i32).equals(2).and(lift(3_i32).equals(3)));
        });
    });

    registry.suite("strings", |suite| {
        suite.test("equality", |o| {
            let greeting = String::from("hello");
            o.expect(lift(greeting.as_str()).equals("hello"));
            o.expect(lift(greeting.len()).not_equals(0usize));
        });
        suite.try_test("parse", |o| {
            let port = parse_port(" 8080 ")?;
            o.require(lift(port).equals(8080u16))?;
            parse_port("not a port")?;
            o.expect(false);
            Ok(())
        });
    });

    clean_test::main(registry)
}
