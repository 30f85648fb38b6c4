use sqlx::PgPool;

const CREATE_TRANSACTION_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS "transaction" (
        id BIGSERIAL PRIMARY KEY,
        date TIMESTAMPTZ NOT NULL,
        amount DOUBLE PRECISION NOT NULL,
        category TEXT NOT NULL,
        transaction_type TEXT NOT NULL,
        note TEXT,
        image_url TEXT,
        spender_id BIGINT NOT NULL
    )
"#;

const CREATE_SPENDER_TYPE_INDEX: &str = r#"
    CREATE INDEX IF NOT EXISTS transaction_spender_type_idx
    ON "transaction" (spender_id, transaction_type)
"#;

/// 建表 (已存在则跳过)
pub async fn init(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query(CREATE_TRANSACTION_TABLE).execute(pool).await?;
    sqlx::query(CREATE_SPENDER_TYPE_INDEX).execute(pool).await?;
    tracing::info!("Transaction schema ready");
    Ok(())
}
