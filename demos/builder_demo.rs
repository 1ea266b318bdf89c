//! Builder-based classification demonstration for rsclassify
//! rsclassify 链式构建规则表演示程序
//! 在代码中构建城市 → (地区, 大洲) 规则表并完成一次解析
//!
//! 运行命令：
//! cargo run --example builder_demo

use rsclassify::{Category, CategoryResolver, ResolverConfig, RuleTableBuilder};
use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // 链式构建规则表：兜底分类缺失会在 build() 阶段直接报错
    let table = RuleTableBuilder::new()
        .rule(
            ["Agadir", "Taroudant", "Ouled teima"],
            Category::new("Souss massa", "Africa"),
        )
        .rule(["New york", "NYC"], Category::new("New York", "North america"))
        .default_category(Category::new("Unknown", "Unknown"))
        .build()?;

    let resolver = CategoryResolver::with_table(table, ResolverConfig::default());

    let (region, continent) = resolver.resolve_pair("Agadir");
    println!("SAADY lives in {}, {}", region, continent);

    Ok(())
}
