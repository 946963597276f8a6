use super::*;

fn lib(id: i64, name: &str) -> Library {
    Library { id, name: name.to_owned(), media_type: "movie".to_owned() }
}

#[test]
fn sort_libraries_orders_by_name() {
    let sorted = sort_libraries(vec![lib(1, "Shows"), lib(2, "Anime"), lib(3, "Movies")]);
    let names: Vec<_> = sorted.iter().map(|l| l.name.as_str()).collect();
    assert_eq!(names, ["Anime", "Movies", "Shows"]);
}

#[test]
fn sort_libraries_handles_empty_input() {
    assert_eq!(sort_libraries(Vec::new()), Vec::new());
}
