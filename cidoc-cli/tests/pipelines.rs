use cidoc_cli::config::{CrossRefConfig, EntityKind, PipelineConfig};
use cidoc_cli::http::HttpFetcher;
use cidoc_cli::pipeline::{run_pipeline, PipelineError};
use cidoc_cli::source::SourceStatus;
use cidoc_mapping::{AcdhMapping, SubjectUri};
use indicatif::ProgressBar;
use std::path::Path;
use std::time::Duration;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const DOMAIN: &str = "https://wmp1.example.org/";
const CRM: &str = "http://www.cidoc-crm.org/cidoc-crm/";
const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

const LISTPLACE: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text><body>
    <listPlace>
      <place xml:id="place_1">
        <placeName xml:lang="de">Wien</placeName>
        <location><geo>48.2082 16.3738</geo></location>
        <idno type="geonames">https://www.geonames.org/2761369</idno>
      </place>
      <place xml:id="place_2">
        <placeName>Graz</placeName>
      </place>
      <place>
        <placeName>Nirgendwo</placeName>
      </place>
    </listPlace>
  </body></text>
</TEI>"#;

const LISTPERSON: &str = r##"<?xml version="1.0" encoding="UTF-8"?>
<TEI xmlns="http://www.tei-c.org/ns/1.0">
  <text><body>
    <listPerson>
      <person xml:id="pers_1">
        <persName><surname>Maier</surname><forename>Hans</forename></persName>
        <birth><date when="1901-05-01">1. Mai 1901</date></birth>
        <residence type="Geburtsort"><placeName key="#place_1">Wien</placeName></residence>
        <occupation key="occ_7">Schriftsteller</occupation>
      </person>
      <person xml:id="pers_2">
        <persName><surname>Huber</surname><forename>Anna</forename></persName>
      </person>
    </listPerson>
    <listRelation>
      <relation name="verheiratet mit" active="#pers_1" passive="#pers_2"/>
    </listRelation>
  </body></text>
</TEI>"##;

const LISTORG: &str = r##"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body><listOrg>
  <org xml:id="org_1">
    <orgName>Wiener Werkstätte</orgName>
    <location type="located_in_place"><placeName key="#place_1">Wien</placeName></location>
  </org>
</listOrg></body></text></TEI>"##;

const LISTPERSON_PLACES: &str = r##"<TEI xmlns="http://www.tei-c.org/ns/1.0"><text><body><listPerson>
  <person xml:id="pers_3">
    <persName><surname>Klimt</surname><forename>Gustav</forename></persName>
    <birth><date when="1862-07-14"/><placeName><settlement key="#place_5">Baumgarten</settlement></placeName></birth>
    <death><date when="1918-02-06"/></death>
    <residence type="Geburtsort"><placeName key="#place_5">Baumgarten</placeName></residence>
    <residence type="Sterbeort"><placeName key="#place_1">Wien</placeName></residence>
    <residence><placeName key="#place_4">Josefstadt</placeName></residence>
    <residence><placeName>ohne Schlüssel</placeName></residence>
    <affiliation from="1897" to="1905"><orgName key="#org_7">Secession</orgName></affiliation>
  </person>
</listPerson></body></text></TEI>"##;

const LOOKUP: &str = r#"{
  "verheiratet mit": {"pfp_uri": "https://pfp-schema.example.org/types/person-person#married"},
  "broken": 42
}"#;

const ONTOLOGY: &str = r#"@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .
@prefix crm: <http://www.cidoc-crm.org/cidoc-crm/> .

<https://pfp-schema.example.org/types/person-person#married>
    a crm:E55_Type ;
    rdfs:label "verheiratet mit"@de .
"#;

fn line(s: &str, p: &str, o: &str) -> String {
    format!("<{s}> <{p}> <{o}> .")
}

fn config(kind: EntityKind, dir: &TempDir, server: &MockServer) -> PipelineConfig {
    let mut config = PipelineConfig::new(kind);
    config.base_url = format!("{}/", server.uri());
    config.domain = DOMAIN.to_string();
    config.output_dir = dir.path().join("datasets");
    config.source = dir.path().join(kind.index_file());
    config.timeout = Duration::from_secs(5);
    if let Some(cross_refs) = config.cross_refs.as_mut() {
        *cross_refs = CrossRefConfig {
            lookup_url: format!("{}/mappings/person-person.json", server.uri()),
            ontology_url: format!("{}/types/person-person.ttl", server.uri()),
        };
    }
    config
}

async fn run(config: &PipelineConfig) -> Result<String, PipelineError> {
    let fetcher = HttpFetcher::new(config.timeout).unwrap();
    let mapping = AcdhMapping::new(config.mapping_config());
    let summary = run_pipeline(config, &mapping, &fetcher, &ProgressBar::hidden()).await?;
    Ok(std::fs::read_to_string(summary.output).unwrap())
}

async fn mount_cross_refs(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/mappings/person-person.json"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LOOKUP))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/types/person-person.ttl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONTOLOGY))
        .mount(server)
        .await;
}

fn subjects(nt: &str) -> Vec<&str> {
    nt.lines()
        .filter_map(|l| l.strip_prefix('<'))
        .filter_map(|l| l.split_once('>'))
        .map(|(s, _)| s)
        .collect()
}

// ============================================================================
// Place
// ============================================================================

#[tokio::test]
async fn place_pipeline_uses_local_source() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<TEI/>"))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listplace.xml"), LISTPLACE).unwrap();
    let config = config(EntityKind::Place, &dir, &server);

    let nt = run(&config).await.unwrap();
    assert!(config.output_path().ends_with("datasets/wmp1_place.nt"));

    let place_1 = format!("{DOMAIN}place_1");
    assert!(nt.contains(&line(&place_1, RDF_TYPE, &format!("{CRM}E53_Place"))));
    assert!(nt.contains(&line(
        &format!("{DOMAIN}place_2"),
        RDF_TYPE,
        &format!("{CRM}E53_Place")
    )));
    assert!(nt.contains(&format!(
        "<{place_1}> <{CRM}P168_place_is_defined_by> \"Point(16.3738 48.2082)\"^^<http://www.opengis.net/ont/geosparql#wktLiteral> ."
    )));
    assert!(nt.contains(&line(
        &place_1,
        "http://www.w3.org/2002/07/owl#sameAs",
        "https://www.geonames.org/2761369"
    )));

    // the place without xml:id contributes nothing
    assert!(!nt.contains("Nirgendwo"));
}

#[tokio::test]
async fn missing_source_is_fetched_once() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/listplace.xml"))
        .respond_with(ResponseTemplate::new(200).set_body_string(LISTPLACE))
        .expect(1)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    let config = config(EntityKind::Place, &dir, &server);
    let fetcher = HttpFetcher::new(config.timeout).unwrap();
    let mapping = AcdhMapping::new(config.mapping_config());

    let first = run_pipeline(&config, &mapping, &fetcher, &ProgressBar::hidden())
        .await
        .unwrap();
    assert_eq!(first.source, SourceStatus::Fetched);
    assert_eq!(first.entities, 2);

    let second = run_pipeline(&config, &mapping, &fetcher, &ProgressBar::hidden())
        .await
        .unwrap();
    assert_eq!(second.source, SourceStatus::Cached);
    assert_eq!(second.triples, first.triples);
}

#[tokio::test]
async fn reruns_are_byte_identical() {
    let server = MockServer::start().await;
    mount_cross_refs(&server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listperson.xml"), LISTPERSON).unwrap();
    let config = config(EntityKind::Person, &dir, &server);

    let first = run(&config).await.unwrap();
    let second = run(&config).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn subject_uris_round_trip_to_xml_ids() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listplace.xml"), LISTPLACE).unwrap();
    let config = config(EntityKind::Place, &dir, &server);

    let nt = run(&config).await.unwrap();
    let place_class = format!("<{RDF_TYPE}> <{CRM}E53_Place> .");
    let mut ids: Vec<String> = nt
        .lines()
        .filter(|l| l.ends_with(&place_class))
        .flat_map(subjects)
        .map(|s| SubjectUri::parse(DOMAIN, s).unwrap().xml_id().to_string())
        .collect();
    ids.sort();
    assert_eq!(ids, ["place_1", "place_2"]);

    let xml_ids: Vec<String> = LISTPLACE
        .match_indices("xml:id=\"")
        .map(|(i, m)| {
            let rest = &LISTPLACE[i + m.len()..];
            rest[..rest.find('"').unwrap()].to_string()
        })
        .collect();
    assert_eq!(ids, xml_ids);
}

#[tokio::test]
async fn single_place_document() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("listplace.xml"),
        r#"<place xml:id="p1"><placeName>Vienna</placeName></place>"#,
    )
    .unwrap();
    let config = config(EntityKind::Place, &dir, &server);

    let nt = run(&config).await.unwrap();
    let p1 = format!("{DOMAIN}p1");
    assert!(nt.contains(&line(&p1, RDF_TYPE, &format!("{CRM}E53_Place"))));
    assert!(nt.contains("\"Vienna\""));
    assert!(!nt.contains("P168_place_is_defined_by"));
}

// ============================================================================
// Org
// ============================================================================

#[tokio::test]
async fn org_location_keys_drop_the_hash() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listorg.xml"), LISTORG).unwrap();
    let config = config(EntityKind::Org, &dir, &server);

    let nt = run(&config).await.unwrap();
    assert!(config.output_path().ends_with("datasets/wkfm_org.nt"));
    let org = format!("{DOMAIN}org_1");
    assert!(nt.contains(&line(&org, RDF_TYPE, &format!("{CRM}E74_Group"))));
    assert!(nt.contains(&line(
        &org,
        &format!("{CRM}P74_has_current_or_former_residence"),
        &format!("{DOMAIN}place_1")
    )));
    assert!(!nt.contains("#place_1"));
}

// ============================================================================
// Person
// ============================================================================

#[tokio::test]
async fn person_pipeline_maps_events_and_relations() {
    let server = MockServer::start().await;
    mount_cross_refs(&server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listperson.xml"), LISTPERSON).unwrap();
    let config = config(EntityKind::Person, &dir, &server);

    let nt = run(&config).await.unwrap();
    let pers_1 = format!("{DOMAIN}pers_1");
    let birth = format!("{pers_1}/birth");

    assert!(nt.contains(&line(&pers_1, RDF_TYPE, &format!("{CRM}E21_Person"))));
    assert!(nt.contains(&line(&birth, RDF_TYPE, &format!("{CRM}E67_Birth"))));
    assert!(nt.contains(&line(
        &birth,
        &format!("{CRM}P98_brought_into_life"),
        &pers_1
    )));
    assert!(nt.contains(&line(
        &birth,
        &format!("{CRM}P7_took_place_at"),
        &format!("{DOMAIN}place_1")
    )));
    assert!(nt.contains(&format!("<{birth}> <{CRM}P4_has_time-span> ")));
    assert!(nt.contains("\"1901-05-01\"^^<http://www.w3.org/2001/XMLSchema#date>"));

    // no death element and no Sterbeort: nothing about a death
    assert!(!nt.contains("/death>"));
    assert!(!nt.contains("E69_Death"));

    let relation = format!("{DOMAIN}relation/pers_1/verheiratet-mit/pers_2");
    assert!(nt.contains(&line(
        &relation,
        "https://pfp-schema.acdh.oeaw.ac.at/schema#SRP3_relation_type",
        "https://pfp-schema.example.org/types/person-person#married"
    )));
    assert!(nt.contains(&line(
        &format!("{DOMAIN}pers_2"),
        "https://pfp-schema.acdh.oeaw.ac.at/schema#SRP1_is_in_social_relation",
        &relation
    )));

    // ontology extension merged in
    assert!(nt.contains(&line(
        "https://pfp-schema.example.org/types/person-person#married",
        RDF_TYPE,
        &format!("{CRM}E55_Type")
    )));
}

#[tokio::test]
async fn failed_lookup_writes_nothing() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/mappings/person-person.json"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/types/person-person.ttl"))
        .respond_with(ResponseTemplate::new(200).set_body_string(ONTOLOGY))
        .expect(0)
        .mount(&server)
        .await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listperson.xml"), LISTPERSON).unwrap();
    let config = config(EntityKind::Person, &dir, &server);

    let err = run(&config).await.unwrap_err();
    assert!(matches!(err, PipelineError::Fetch(_)), "got: {err}");
    assert!(!config.output_path().exists());
}

#[tokio::test]
async fn malformed_source_is_reported_with_path() {
    let server = MockServer::start().await;
    let dir = TempDir::new().unwrap();
    let source = dir.path().join("listplace.xml");
    std::fs::write(&source, "<TEI><listPlace></TEI>").unwrap();
    let config = config(EntityKind::Place, &dir, &server);

    let err = run(&config).await.unwrap_err();
    match &err {
        PipelineError::Tei { path, .. } => assert_eq!(path, Path::new(&source)),
        other => panic!("expected Tei error, got: {other}"),
    }
    assert!(!config.output_path().exists());
}

#[tokio::test]
async fn person_places_residences_and_affiliations() {
    let server = MockServer::start().await;
    mount_cross_refs(&server).await;

    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("listperson.xml"), LISTPERSON_PLACES).unwrap();
    let config = config(EntityKind::Person, &dir, &server);

    let nt = run(&config).await.unwrap();
    let pers_3 = format!("{DOMAIN}pers_3");
    let took_place_at = format!("{CRM}P7_took_place_at");

    // settlement nested in the birth element, minted in the place__ namespace
    assert!(nt.contains(&line(
        &format!("{pers_3}/birth"),
        &took_place_at,
        &format!("{DOMAIN}place__place_5")
    )));
    // typed residences name the event places
    assert!(nt.contains(&line(
        &format!("{pers_3}/birth"),
        &took_place_at,
        &format!("{DOMAIN}place_5")
    )));
    assert!(nt.contains(&line(
        &format!("{pers_3}/death"),
        &took_place_at,
        &format!("{DOMAIN}place_1")
    )));

    // every keyed residence, typed or not; the unkeyed one is skipped
    let residence = format!("{CRM}P74_has_current_or_former_residence");
    let mut places: Vec<&str> = nt
        .lines()
        .filter(|l| l.starts_with(&format!("<{pers_3}> <{residence}> ")))
        .filter_map(|l| l.rsplit_once(" <"))
        .map(|(_, o)| o.trim_end_matches("> ."))
        .collect();
    places.sort();
    assert_eq!(
        places,
        [
            format!("{DOMAIN}place_1"),
            format!("{DOMAIN}place_4"),
            format!("{DOMAIN}place_5"),
        ]
    );

    let org = format!("{DOMAIN}org_7");
    let joining = format!("{pers_3}/joining/org_7/0");
    let leaving = format!("{pers_3}/leaving/org_7/0");
    assert!(nt.contains(&line(&joining, RDF_TYPE, &format!("{CRM}E85_Joining"))));
    assert!(nt.contains(&line(&joining, &format!("{CRM}P143_joined"), &pers_3)));
    assert!(nt.contains(&line(&joining, &format!("{CRM}P144_joined_with"), &org)));
    assert!(nt.contains(&format!(
        "<{joining}> <http://www.w3.org/2000/01/rdf-schema#label> \"Klimt, Gustav joins Secession\"@de ."
    )));
    assert!(nt.contains(&line(&leaving, RDF_TYPE, &format!("{CRM}E86_Leaving"))));
    assert!(nt.contains(&line(&leaving, &format!("{CRM}P146_separated_from"), &org)));
    assert!(nt.contains(&line(&org, RDF_TYPE, &format!("{CRM}E74_Group"))));
}
