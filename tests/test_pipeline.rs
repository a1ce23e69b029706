use pokepicker::extractors::{Extractor, WikiTableExtractor};
use pokepicker::normalizer::normalize;
use pokepicker::{pick_pokemon, PickerConfig, PickerError, Store};
use std::fs;

fn create_export_page(rows: &[&str]) -> String {
    format!(
        r#"<mediawiki xml:lang="de">
<page>
<title>Pokémon-Liste</title>
<revision>
<text xml:space="preserve">Dies ist eine Liste aller Pokémon.
{{| class="wikitable sortable"
! Nr. !! Bild !! Deutsch !! Englisch !! Japanisch !! Katakana !! Romaji !! Trademark !! Typ !! Gen
|-
{}
|}}
[[Kategorie:Liste]]</text>
</revision>
</page>
</mediawiki>"#,
        rows.join("\n|-\n")
    )
}

const BISASAM: &str = "| 001 || [[Datei:Sugimori 001.png|50px]] || [[Bisasam]] || Bulbasaur || フシギダネ || Fushigidane || Fushigidane || Fushigidane || Pflanze || 1";
const PIKACHU: &str = "| 025 || [[Datei:Sugimori 025.png|50px]] || [[Pikachu]] || Pikachu || ピカチュウ || Pikachu || Pikachu || Pikachu || Elektro || 1";

fn config_for(server: &mockito::Server, dir: &tempfile::TempDir) -> PickerConfig {
    PickerConfig {
        source_url: format!("{}/Spezial:Exportieren/Pokemon-Liste", server.url()),
        sprite_base_url: "http://sprites/".to_string(),
        store_path: dir.path().join("pokemons.csv"),
        timeout: 5,
    }
}

#[test]
fn test_example_document() {
    let document =
        "noise{|\n|1||http://x/1.png||[Bulbasaur]||Bulbasaur||xx||yy||Fushigidane||zz||ww||vv\n|}tail";

    let rows = WikiTableExtractor.extract(document).unwrap();
    assert_eq!(
        rows,
        vec![[
            "|1".to_string(),
            "http://x/1.png".to_string(),
            "[Bulbasaur]".to_string(),
            "Bulbasaur".to_string(),
            "Fushigidane".to_string(),
        ]]
    );

    let records = normalize(rows, "http://sprites/");
    assert_eq!(
        records[0].fields(),
        [
            "1",
            "http://sprites/1.png",
            "Bulbasaur",
            "Bulbasaur",
            "Fushigidane"
        ]
    );
}

#[test]
fn test_nine_cell_row_is_dropped() {
    let document =
        "noise{| |1||http://x/1.png||[Bulbasaur]||Bulbasaur||xx||yy||Fushigidane||zz||ww|}tail";

    assert!(WikiTableExtractor.extract(document).unwrap().is_empty());
}

#[test]
fn test_pick_pokemon_generates_store() {
    let mut server = mockito::Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, &dir);

    let mock = server
        .mock("GET", "/Spezial:Exportieren/Pokemon-Liste")
        .with_status(200)
        .with_header("content-type", "application/xml; charset=utf-8")
        .with_body(create_export_page(&[BISASAM, PIKACHU]))
        .expect(1)
        .create();

    let record = pick_pokemon(&config).unwrap().unwrap();
    assert!(record.id == "001" || record.id == "025");

    let stored = fs::read_to_string(&config.store_path).unwrap();
    assert_eq!(
        stored,
        "001;http://sprites/001.png;Bisasam; Bulbasaur ; Fushigidane \n\
         025;http://sprites/025.png;Pikachu; Pikachu ; Pikachu \n"
    );

    // A second run reads the store without fetching again
    pick_pokemon(&config).unwrap().unwrap();
    mock.assert();
}

#[test]
fn test_pick_pokemon_fetch_failure() {
    let mut server = mockito::Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, &dir);

    let _m = server
        .mock("GET", "/Spezial:Exportieren/Pokemon-Liste")
        .with_status(503)
        .create();

    let result = pick_pokemon(&config);

    assert!(matches!(result, Err(PickerError::FetchError(_))));
    assert!(!Store::new(&config.store_path).exists());
}

#[test]
fn test_pick_pokemon_page_without_table() {
    let mut server = mockito::Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, &dir);

    let _m = server
        .mock("GET", "/Spezial:Exportieren/Pokemon-Liste")
        .with_status(200)
        .with_body("<mediawiki><page><text>Seite nicht gefunden</text></page></mediawiki>")
        .create();

    let result = pick_pokemon(&config);

    assert!(matches!(result, Err(PickerError::ParseError(_))));
}

#[test]
fn test_duplicates_are_kept() {
    let mut server = mockito::Server::new();
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(&server, &dir);

    let _m = server
        .mock("GET", "/Spezial:Exportieren/Pokemon-Liste")
        .with_status(200)
        .with_body(create_export_page(&[PIKACHU, BISASAM, PIKACHU]))
        .create();

    pick_pokemon(&config).unwrap();

    let ids: Vec<String> = Store::new(&config.store_path)
        .load()
        .unwrap()
        .into_iter()
        .map(|r| r.id)
        .collect();
    assert_eq!(ids, vec!["025", "001", "025"]);
}
