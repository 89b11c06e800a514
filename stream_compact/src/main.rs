use itertools::Itertools;
use scan_tools::blelloch;
use stream_compact::timing::TimeScope;
use stream_compact::{compact, scan};

pub fn main() {
    // Roughly a third of the elements are zero.
    let xs = (0i32..1 << 20)
        .map(|i| if i % 3 == 0 { 0 } else { i % 7 })
        .collect_vec();

    let scope = TimeScope::begin("sequential scan");
    let seq = blelloch::exclusive_scan_seq(&xs);
    scope.report();

    let scope = TimeScope::begin("parallel scan");
    let par = scan(&xs).unwrap();
    scope.report();

    assert_eq!(seq, par);
    println!("scan head: {:?}", &par[..8]);

    let scope = TimeScope::begin("compact");
    let (kept, count) = compact(&xs).unwrap();
    scope.report();

    println!("kept {} of {}", count, xs.len());
    println!("compact head: {:?}", &kept[..8.min(kept.len())]);
}
