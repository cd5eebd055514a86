use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

const BIN: &str = "csv-filter";

#[test]
fn filters_fixed_paths_in_working_directory() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    fs::create_dir_all(tmp.path().join("dados"))?;
    fs::write(
        tmp.path().join("dados/entrada.csv"),
        "id,valor\n1,50\n2,150\n3,100\n",
    )?;

    Command::cargo_bin(BIN)?
        .current_dir(tmp.path())
        .assert()
        .success();

    assert_eq!(
        fs::read_to_string(tmp.path().join("resultados/saida.csv"))?,
        "id,valor\n2,150\n"
    );
    Ok(())
}

#[test]
fn missing_input_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;

    Command::cargo_bin(BIN)?
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("dados/entrada.csv"));

    assert!(!tmp.path().join("resultados").exists());
    Ok(())
}

#[test]
fn missing_column_exits_non_zero() -> Result<(), Box<dyn std::error::Error>> {
    let tmp = tempfile::tempdir()?;
    fs::create_dir_all(tmp.path().join("dados"))?;
    fs::write(tmp.path().join("dados/entrada.csv"), "id,preco\n1,500\n")?;

    Command::cargo_bin(BIN)?
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Column 'valor' not found"));

    assert!(!tmp.path().join("resultados/saida.csv").exists());
    Ok(())
}
