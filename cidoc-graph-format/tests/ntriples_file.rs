use cidoc_graph_format::{write_ntriples_file, NTriplesFormatConfig};
use cidoc_graph_ir::{Graph, Term};
use cidoc_vocab::{crm, rdf};

fn sample_graph() -> Graph {
    let mut graph = Graph::new();
    for id in ["p2", "p1"] {
        graph.add_triple(
            Term::iri(format!("https://wmp1.acdh.oeaw.ac.at/{id}")),
            Term::iri(rdf::TYPE),
            Term::iri(crm::E53_PLACE),
        );
    }
    graph
}

#[test]
fn creates_missing_output_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("datasets").join("wmp1_place.nt");

    write_ntriples_file(&path, &sample_graph(), &NTriplesFormatConfig::default()).unwrap();

    let written = std::fs::read_to_string(&path).unwrap();
    assert_eq!(written.lines().count(), 2);
    assert!(written.starts_with("<https://wmp1.acdh.oeaw.ac.at/p1>"));
}

#[test]
fn overwrites_previous_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wmp1_place.nt");
    std::fs::write(&path, "stale content that is much longer than nothing\n").unwrap();

    write_ntriples_file(&path, &Graph::new(), &NTriplesFormatConfig::default()).unwrap();

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
    // Only the output file remains; the temporary sibling was renamed
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn repeated_writes_are_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.nt");
    let config = NTriplesFormatConfig::default();

    write_ntriples_file(&path, &sample_graph(), &config).unwrap();
    let first = std::fs::read(&path).unwrap();
    write_ntriples_file(&path, &sample_graph(), &config).unwrap();
    let second = std::fs::read(&path).unwrap();

    assert_eq!(first, second);
}

#[cfg(unix)]
#[test]
fn new_output_is_world_readable_under_umask() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    // a plain create gets 0o666 minus the umask
    let plain = dir.path().join("umask");
    std::fs::File::create(&plain).unwrap();
    let created = std::fs::metadata(&plain).unwrap().permissions().mode() & 0o777;

    let path = dir.path().join("wmp1_person.nt");
    write_ntriples_file(&path, &sample_graph(), &NTriplesFormatConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o644 & created, "mode {mode:o}");
}

#[cfg(unix)]
#[test]
fn rewrite_keeps_existing_permissions() {
    use std::os::unix::fs::PermissionsExt;

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wkfm_org.nt");
    std::fs::write(&path, "").unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o664)).unwrap();

    write_ntriples_file(&path, &sample_graph(), &NTriplesFormatConfig::default()).unwrap();

    let mode = std::fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o664, "mode {mode:o}");
}
