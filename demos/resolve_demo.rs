//! Embedded rule classification demonstration for rsclassify
//! rsclassify 内置规则分类演示程序
//! 功能说明：
//! 1. 演示内置规则表加载流程
//! 2. 展示键 → 分类解析能力（精确命中/兜底回退）
//! 3. 包含耗时统计与结构化JSON结果输出
//!
//! 运行命令：
//! cargo run --example resolve_demo

use env_logger::{Builder, Env, Target};
use rsclassify::{CategoryResolver, ResolverConfig};
use serde_json::to_string_pretty;
use std::{error::Error, time::Instant};

fn main() -> Result<(), Box<dyn Error>> {
    // ========== 1. 日志系统初始化 ==========
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Stdout)
        .init();

    // ========== 2. 初始化分类器（内置规则表） ==========
    let resolver = CategoryResolver::new(ResolverConfig::embedded())?;
    println!(
        "规则表已加载 | 规则数: {} | 索引键数: {}",
        resolver.rule_count(),
        resolver.key_count()
    );

    // ========== 3. 执行分类解析（含耗时统计） ==========
    let inputs = ["Agadir", "NYC", "Casablanca", "Tokyo", "agadir", ""];

    let start_instant = Instant::now();
    let results: Vec<_> = inputs
        .iter()
        .map(|key| (*key, resolver.resolve_owned(key)))
        .collect();
    let resolve_duration_ms = start_instant.elapsed().as_secs_f64() * 1000.0;

    // ========== 4. 输出结构化解析结果 ==========
    println!("\n=============================== 解析结果 ===============================");
    println!("✅ 分类解析完成 | 总耗时: {:.3} 毫秒", resolve_duration_ms);
    println!("========================================================================");

    for (key, category) in &results {
        let result_json = to_string_pretty(category)?;
        println!("📊 输入[{}] → 分类:\n{}", key, result_json);
    }

    Ok(())
}
