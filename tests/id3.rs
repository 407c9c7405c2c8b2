use id3_tree::prelude::*;


fn sample_of(columns: &[(&str, &[&str])]) -> Sample {
    let features = columns.iter()
        .map(|(name, vals)| Feature::from_vals(name, vals.iter()))
        .collect::<Vec<_>>();
    Sample::from_features(features).unwrap()
}


fn play_tennis() -> Sample {
    let mut path = std::env::current_dir().unwrap();
    path.push("tests/dataset/play_tennis.csv");

    SampleReader::default()
        .file(path)
        .has_header(true)
        .target_feature("PlayTennis")
        .read()
        .unwrap()
}


fn child<'a>(tree: &'a Id3Tree, id: NodeId, value: &str) -> (NodeId, &'a TreeNode) {
    tree[id].children()
        .iter()
        .map(|&c| (c, &tree[c]))
        .find(|(_, node)| node.incoming_edge_value() == Some(value))
        .unwrap_or_else(|| panic!("no child for `{value}`"))
}


// Weather | Play
// --------+-----
// Sunny   | Yes
// Sunny   | Yes
// Rainy   | No
#[test]
fn single_attribute_split() {
    let sample = sample_of(&[
        ("Weather", &["Sunny", "Sunny", "Rainy"]),
        ("Play",    &["Yes", "Yes", "No"]),
    ]);
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();

    let root = &tree[tree.root()];
    assert_eq!(root.selected_attribute(), Some("Weather"));
    assert_eq!(root.n_instances(), 3);
    assert!(root.incoming_edge_value().is_none());
    assert!(!root.is_leaf());

    let values = tree.children(tree.root())
        .map(|node| node.incoming_edge_value().unwrap())
        .collect::<Vec<_>>();
    assert_eq!(values, vec!["Rainy", "Sunny"]);

    let (_, sunny) = child(&tree, tree.root(), "Sunny");
    assert_eq!(sunny.leaf_kind(), Some(LeafKind::Pure));
    assert_eq!(sunny.n_instances(), 2);
    assert_eq!(sunny.class_counts()["Yes"], 2);
    assert_eq!(sunny.class(), Some("Yes"));

    let (_, rainy) = child(&tree, tree.root(), "Rainy");
    assert_eq!(rainy.leaf_kind(), Some(LeafKind::Pure));
    assert_eq!(rainy.n_instances(), 1);
    assert_eq!(rainy.class_counts()["No"], 1);
    assert_eq!(rainy.selected_attribute(), None);
}


#[test]
fn constant_target_gives_leaf_root() {
    let sample = sample_of(&[
        ("Weather", &["Sunny", "Rainy", "Cloudy"]),
        ("Play",    &["Yes", "Yes", "Yes"]),
    ]);
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();

    assert_eq!(tree.len(), 1);
    let root = &tree[tree.root()];
    assert_eq!(root.leaf_kind(), Some(LeafKind::Pure));
    assert!(root.children().is_empty());
    assert_eq!(root.selected_attribute(), None);
    assert_eq!(root.class(), Some("Yes"));
}


#[test]
fn perfect_predictor_is_selected() {
    let sample = sample_of(&[
        ("A", &["x", "y", "x", "y", "x", "y"]),
        ("B", &["p", "p", "q", "q", "p", "q"]),
        ("C", &["1", "0", "1", "0", "1", "0"]),
    ]);
    let id3 = Id3Builder::new(&sample).build().unwrap();
    let criterion = id3.information_gain();
    let rows = (0..6).collect::<Vec<_>>();

    let (best, score) = criterion.select(id3.attributes(), &rows).unwrap();
    assert_eq!(best.label(), "A");
    assert_eq!(score, 0f64);

    let b = id3.attributes()
        .iter()
        .find(|a| a.label() == "B")
        .unwrap();
    assert!(criterion.score(b, &rows) > 0f64);

    let tree = id3.generate_tree();
    assert_eq!(tree[tree.root()].selected_attribute(), Some("A"));
    assert_eq!(tree.depth(), 1);
    assert_eq!(tree.n_leaves(), 2);
}


#[test]
fn play_tennis_tree() {
    let sample = play_tennis();
    assert_eq!(sample.shape(), (14, 4));

    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();
    assert_eq!(tree.len(), 8);
    assert_eq!(tree.n_leaves(), 5);
    assert_eq!(tree.depth(), 2);

    let root = tree.root();
    assert_eq!(tree[root].selected_attribute(), Some("Outlook"));

    let (_, overcast) = child(&tree, root, "Overcast");
    assert_eq!(overcast.class(), Some("Yes"));
    assert_eq!(overcast.n_instances(), 4);

    let (sunny, node) = child(&tree, root, "Sunny");
    assert_eq!(node.selected_attribute(), Some("Humidity"));
    let (_, high) = child(&tree, sunny, "High");
    assert_eq!(high.class(), Some("No"));
    assert_eq!(high.n_instances(), 3);

    let (rain, node) = child(&tree, root, "Rain");
    assert_eq!(node.selected_attribute(), Some("Wind"));
    let (weak, _) = child(&tree, rain, "Weak");
    assert_eq!(tree[weak].class(), Some("Yes"));
    assert_eq!(tree.path(weak), vec![root, rain, weak]);
    assert_eq!(tree.edge_label(weak).as_deref(), Some("Wind = Weak"));
}


#[test]
fn play_tennis_text() {
    let sample = play_tennis();
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();

    let expected = "\
[root] -> split on Outlook | 14 instances
    Outlook = Overcast -> leaf (pure): Yes | 4 instances | No: 0, Yes: 4
    Outlook = Rain -> split on Wind | 5 instances
        Wind = Strong -> leaf (pure): No | 2 instances | No: 2, Yes: 0
        Wind = Weak -> leaf (pure): Yes | 3 instances | No: 0, Yes: 3
    Outlook = Sunny -> split on Humidity | 5 instances
        Humidity = High -> leaf (pure): No | 3 instances | No: 3, Yes: 0
        Humidity = Normal -> leaf (pure): Yes | 2 instances | No: 0, Yes: 2";

    assert_eq!(tree.to_string(), expected);
    assert_eq!(
        tree.printer().indent(2).line(tree.root()),
        "[root] -> split on Outlook | 14 instances"
    );
}


#[test]
fn play_tennis_dot_and_json() {
    let sample = play_tennis();
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();

    let dot = tree.to_dot();
    assert!(dot.starts_with("graph ID3 {\n"));
    assert!(dot.ends_with('}'));
    assert!(dot.contains("\tnode_0 [ label = \"Outlook ?\" ];\n"));
    assert!(dot.contains("\tnode_0 -- node_1 [ label = \"Overcast\" ];\n"));

    let json = tree.to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["target"], "PlayTennis");
    assert_eq!(value["root"]["attribute"], "Outlook");
    assert_eq!(value["root"]["instances"], 14);
    assert_eq!(value["root"]["children"][0]["value"], "Overcast");
    assert_eq!(value["root"]["children"][0]["leaf"], "Pure");
    assert_eq!(value["root"]["children"][0]["class_counts"]["Yes"], 4);
}


// B  | A | C
// ---+---+----
// p  | x | yes
// p  | x | no
// p  | y | yes
// q  | z | no
// q  | y | no
//
// The root splits on `B`. Under `B = p` no row has `A = z`,
// and the rows with `A = x` cannot be separated.
#[test]
fn empty_and_exhausted_leaves() {
    let sample = sample_of(&[
        ("A", &["x", "x", "y", "z", "y"]),
        ("B", &["p", "p", "p", "q", "q"]),
        ("C", &["yes", "no", "yes", "no", "no"]),
    ]);
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();
    assert_eq!(tree.len(), 6);

    let root = tree.root();
    assert_eq!(tree[root].selected_attribute(), Some("B"));

    let (p, node) = child(&tree, root, "p");
    assert_eq!(node.selected_attribute(), Some("A"));
    assert_eq!(node.children().len(), 3);
    assert!(node.attributes().iter().all(|a| a.label() == "A"));

    let (_, x) = child(&tree, p, "x");
    assert_eq!(x.leaf_kind(), Some(LeafKind::Exhausted));
    assert!(x.attributes().is_empty());
    assert_eq!(x.class(), Some("no"));

    let (_, z) = child(&tree, p, "z");
    assert_eq!(z.leaf_kind(), Some(LeafKind::Empty));
    assert_eq!(z.n_instances(), 0);
    assert_eq!(z.class(), Some("yes"));
    assert!(z.class_counts().values().all(|&n| n == 0));

    let (_, q) = child(&tree, root, "q");
    assert_eq!(q.leaf_kind(), Some(LeafKind::Pure));
}


#[test]
fn malformed_datasets_are_rejected() {
    let features = vec![Feature::from_vals("Play", ["Yes"])];
    let err = Sample::from_features(features).unwrap_err();
    assert!(matches!(err, Id3Error::TooFewColumns(1)));

    let features = vec![
        Feature::from_vals("A", Vec::<String>::new()),
        Feature::from_vals("Play", Vec::<String>::new()),
    ];
    let err = Sample::from_features(features).unwrap_err();
    assert!(matches!(err, Id3Error::NoRows));
    assert!(err.is_invalid_dataset());

    let csv = "A,A,Play\nx,y,Yes\n";
    let err = Sample::from_reader(std::io::BufReader::new(csv.as_bytes()), true)
        .unwrap_err();
    assert!(matches!(err, Id3Error::DuplicateLabel(_)));
}


#[test]
fn parallel_and_sequential_agree() {
    let sample = play_tennis();
    let parallel = Id3Builder::new(&sample)
        .parallel(true)
        .build()
        .unwrap()
        .generate_tree();
    let sequential = Id3Builder::new(&sample)
        .parallel(false)
        .build()
        .unwrap()
        .generate_tree();
    assert_eq!(parallel, sequential);
}


#[test]
fn dot_labels_are_escaped() {
    let sample = sample_of(&[
        ("Quote \"q\"", &["say \"hi\"", "C:\\dir", "say \"hi\""]),
        ("Play",        &["Yes", "No\\", "Yes"]),
    ]);
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();
    let dot = tree.to_dot();

    assert!(dot.contains("\tnode_0 [ label = \"Quote \\\"q\\\" ?\" ];\n"));
    assert!(dot.contains("\tnode_0 -- node_1 [ label = \"C:\\\\dir\" ];\n"));
    assert!(dot.contains("\tnode_0 -- node_2 [ label = \"say \\\"hi\\\"\" ];\n"));
    assert!(dot.contains("[ label = \"No\\\\\\nNo\\\\: 1, Yes: 0\", shape = box ];"));

    // Every `"` left unescaped opens or closes a label.
    for line in dot.lines().filter(|l| l.contains("label")) {
        let bare = line.replace("\\\\", "").replace("\\\"", "");
        assert_eq!(bare.matches('"').count(), 2, "{line}");
    }
}


#[test]
fn dot_file_matches_to_dot() {
    let sample = play_tennis();
    let tree = Id3Builder::new(&sample).build().unwrap().generate_tree();

    let mut path = std::env::temp_dir();
    path.push(format!("id3_tree_{}.dot", std::process::id()));
    tree.to_dot_file(&path).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    std::fs::remove_file(&path).unwrap();
    assert_eq!(written, tree.to_dot());
}
