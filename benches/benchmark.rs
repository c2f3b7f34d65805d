use criterion::{Criterion, criterion_group, criterion_main};
use newick_tree::newick::NewickParser;
use newick_tree::{Tree, parse, tokenize};
use std::hint::black_box;

/// Balanced binary tree with `2^height` leaves named `t0`, `t1`, ...
fn balanced_newick(height: u32) -> String {
    fn build(height: u32, next: &mut usize) -> Tree {
        if height == 0 {
            *next += 1;
            Tree::leaf(format!("t{}", *next - 1))
        } else {
            Tree::node(vec![build(height - 1, next), build(height - 1, next)])
        }
    }
    build(height, &mut 0).to_text()
}

/// Caterpillar `(t0,(t1,(t2,...)))` nested `depth` levels deep.
fn caterpillar_newick(depth: usize) -> String {
    let mut newick = String::new();
    for i in 0..depth {
        newick.push_str(&format!("(t{i},"));
    }
    newick.push_str("leaf");
    newick.push_str(&")".repeat(depth));
    newick
}

fn newick_parsing(c: &mut Criterion) {
    let balanced = balanced_newick(12);
    let caterpillar = caterpillar_newick(1000);

    c.bench_function("tokenize balanced 4096", |b| {
        b.iter(|| tokenize(black_box(&balanced)));
    });
    c.bench_function("parse balanced 4096", |b| {
        b.iter(|| parse(black_box(&balanced)).unwrap());
    });
    c.bench_function("parse caterpillar 1000", |b| {
        let parser = NewickParser::new();
        b.iter(|| parser.parse_str(black_box(&caterpillar)).unwrap());
    });
}

fn newick_writing(c: &mut Criterion) {
    let tree = parse(balanced_newick(12)).unwrap();
    c.bench_function("to_text balanced 4096", |b| {
        b.iter(|| black_box(&tree).to_text());
    });
}

criterion_group!(benches, newick_parsing, newick_writing);
criterion_main!(benches);
