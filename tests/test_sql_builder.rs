//! Unit tests for the SqlBuilder query construction.

use fx_dashboard::SqlBuilder;

// ---------------------------------------------------------------------------
// Basic construction
// ---------------------------------------------------------------------------

#[test]
fn new_creates_select_star_from_table() {
    let (sql, params) = SqlBuilder::new("raw_operations").build();
    assert_eq!(sql, "SELECT *\nFROM raw_operations");
    assert!(params.is_empty());
}

#[test]
fn select_replaces_default_star() {
    let (sql, _) = SqlBuilder::new("raw_operations")
        .select(&["NOME_BANCO", "ANO"])
        .build();
    assert!(sql.starts_with("SELECT NOME_BANCO, ANO\n"));
}

#[test]
fn select_owned_accepts_formatted_aliases() {
    let cols = vec![
        "\"NOME_BANCO\" AS bank_name".to_string(),
        "\"ANO\" AS year".to_string(),
    ];
    let (sql, _) = SqlBuilder::new("raw_operations").select_owned(cols).build();
    assert!(sql.starts_with("SELECT \"NOME_BANCO\" AS bank_name, \"ANO\" AS year\n"));
}

// ---------------------------------------------------------------------------
// WHERE conditions
// ---------------------------------------------------------------------------

#[test]
fn where_in_adds_in_clause() {
    let (sql, params) = SqlBuilder::new("raw_operations")
        .where_in("NOME_BANCO", &["BB", "ITAU", "SAFRA"])
        .build();
    assert!(sql.contains("NOME_BANCO IN (?, ?, ?)"));
    assert_eq!(params, vec!["BB", "ITAU", "SAFRA"]);
}

#[test]
fn where_in_empty_produces_false() {
    let (sql, params) = SqlBuilder::new("raw_operations")
        .where_in("NOME_BANCO", &[])
        .build();
    assert!(sql.contains("WHERE FALSE"));
    assert!(params.is_empty());
}

#[test]
fn where_clause_appends_params_in_order() {
    let (sql, params) = SqlBuilder::new("raw_operations")
        .where_clause("ANO BETWEEN ? AND ?", &["2020", "2022"])
        .where_in("NOME_BANCO", &["BB"])
        .build();
    assert!(sql.contains("WHERE ANO BETWEEN ? AND ? AND NOME_BANCO IN (?)"));
    assert_eq!(params, vec!["2020", "2022", "BB"]);
}

#[test]
fn where_clause_without_params() {
    let (sql, params) = SqlBuilder::new("raw_operations")
        .select(&["COUNT(*)"])
        .where_clause("\"TRIMESTRE\" NOT BETWEEN 1 AND 4", &[])
        .build();
    assert_eq!(
        sql,
        "SELECT COUNT(*)\nFROM raw_operations\nWHERE \"TRIMESTRE\" NOT BETWEEN 1 AND 4"
    );
    assert!(params.is_empty());
}

#[test]
fn multiple_where_conditions_joined_with_and() {
    let (sql, _) = SqlBuilder::new("raw_operations")
        .where_in("ANO", &["2020"])
        .where_in("TRIMESTRE", &["1", "2"])
        .where_in("NOME_BANCO", &["BB"])
        .build();
    assert!(sql.contains("WHERE ANO IN (?) AND TRIMESTRE IN (?, ?) AND NOME_BANCO IN (?)"));
}

// ---------------------------------------------------------------------------
// GROUP BY / ORDER BY
// ---------------------------------------------------------------------------

#[test]
fn group_by_adds_clause() {
    let (sql, _) = SqlBuilder::new("raw_operations")
        .select(&["ANO", "TRIMESTRE", "SUM(NUMERO_OP) AS n"])
        .group_by(&["ANO", "TRIMESTRE"])
        .build();
    assert!(sql.contains("GROUP BY ANO, TRIMESTRE"));
}

#[test]
fn order_by_accumulates() {
    let (sql, _) = SqlBuilder::new("raw_operations")
        .order_by(&["ANO ASC"])
        .order_by(&["TRIMESTRE DESC"])
        .build();
    assert!(sql.contains("ORDER BY ANO ASC, TRIMESTRE DESC"));
}

#[test]
fn combined_chain_keeps_clause_order() {
    let (sql, params) = SqlBuilder::new("raw_operations")
        .select(&["NOME_BANCO", "SUM(RESULT_OP) AS result"])
        .where_in("ANO", &["2021", "2022"])
        .group_by(&["NOME_BANCO"])
        .order_by(&["result DESC"])
        .build();
    assert_eq!(
        sql,
        "SELECT NOME_BANCO, SUM(RESULT_OP) AS result\n\
         FROM raw_operations\n\
         WHERE ANO IN (?, ?)\n\
         GROUP BY NOME_BANCO\n\
         ORDER BY result DESC"
    );
    assert_eq!(params, vec!["2021", "2022"]);
}
