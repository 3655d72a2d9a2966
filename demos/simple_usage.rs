/// Seekdex API Demo
///
/// Demonstrates the main server operations:
/// - Adding documents with statuses and ratings
/// - Searching (plain, minus words, status and predicate filters, parallel)
/// - Matching a query against one document
/// - Removing documents and duplicates
/// - Batch queries

use seekdex::core::search_server::SearchServer;
use seekdex::core::types::{DocumentStatus, ExecutionPolicy};
use seekdex::dedup::detector::remove_duplicates;
use seekdex::parallel::queries::process_queries;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("\n╔═══════════════════════════════════════════════╗");
    println!("║       Seekdex Search Server - API Demo        ║");
    println!("╚═══════════════════════════════════════════════╝\n");

    // Step 1: Create server
    println!("Creating server...");
    let mut server = SearchServer::new("and in on with the")?;
    println!("Done!\n");

    // Step 2: INSERT - Add documents
    println!("Step 2: INSERT - Adding documents...");
    server.add_document(1, "white cat and fashionable collar", DocumentStatus::Active, &[8, -3])?;
    server.add_document(2, "fluffy cat fluffy tail", DocumentStatus::Active, &[7, 2, 7])?;
    server.add_document(3, "groomed dog expressive eyes", DocumentStatus::Active, &[5, -12, 2, 1])?;
    server.add_document(4, "groomed starling eugene", DocumentStatus::Banned, &[9])?;
    server.add_document(5, "fluffy tail with fluffy cat", DocumentStatus::Active, &[1])?;
    println!("  Inserted {} documents\n", server.document_count());

    // Step 3: SEARCH - Different query shapes
    println!("Step 3: SEARCH - Querying documents...");
    for hit in server.find_top_documents("fluffy groomed cat")? {
        println!("  {}", hit);
    }
    println!("  'cat -collar':");
    for hit in server.find_top_documents("cat -collar")? {
        println!("    {}", hit);
    }
    println!("  banned 'groomed':");
    for hit in server.find_top_documents_by_status("groomed", DocumentStatus::Banned)? {
        println!("    {}", hit);
    }
    println!("  even ids (parallel):");
    for hit in server.find_top_documents_with(ExecutionPolicy::Parallel, "fluffy groomed cat", |id, _, _| id.value() % 2 == 0)? {
        println!("    {}", hit);
    }
    match server.find_top_documents("cat --dog") {
        Ok(_) => println!("  'cat --dog' unexpectedly accepted"),
        Err(e) => println!("  'cat --dog' rejected: {}", e),
    }
    println!();

    // Step 4: MATCH - Words of a query found in one document
    println!("Step 4: MATCH - Matching document 2...");
    let (words, status) = server.match_document("fluffy tail -collar", 2)?;
    println!("  words: {:?}, status: {}\n", words, status);

    // Step 5: BATCH - Parallel query batch
    println!("Step 5: BATCH - Processing queries...");
    let queries = ["fluffy cat", "groomed dog", "eugene"];
    for (query, hits) in queries.iter().zip(process_queries(&server, &queries)?) {
        println!("  {:?}: {} results", query, hits.len());
    }
    println!();

    // Step 6: DEDUPLICATE - Same word sets
    println!("Step 6: DEDUPLICATE - Removing duplicates...");
    let removed = remove_duplicates(&mut server);
    println!("  Removed {:?}\n", removed);

    // Step 7: DELETE - Remove a document
    println!("Step 7: DELETE - Removing document 3...");
    server.remove_document_with(ExecutionPolicy::Parallel, 3);
    println!("  Remaining ids: {:?}", server.iter().collect::<Vec<_>>());

    println!("\n╔════════════════════════════════════════╗");
    println!("║    All API Operations Completed!      ║");
    println!("╚════════════════════════════════════════╝\n");

    Ok(())
}
