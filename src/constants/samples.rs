/// Built-in snippets for trying the tool without your own code: (name, language, code).
pub const SAMPLE_CODES: &[(&str, &str, &str)] = &[
    ("Python - Bubble Sort", "Python", r#"def bubble_sort(arr):
    n = len(arr)
    # Traverse through all array elements
    for i in range(n):
        # Last i elements are already in place
        for j in range(0, n-i-1):
            # Traverse the array from 0 to n-i-1
            # Swap if the element found is greater
            # than the next element
            if arr[j] > arr[j+1]:
                arr[j], arr[j+1] = arr[j+1], arr[j]
    return arr

# Example usage
numbers = [64, 34, 25, 12, 22, 11, 90]
sorted_numbers = bubble_sort(numbers)
print(f"Sorted array: {sorted_numbers}")"#),
    ("JavaScript - Async Fetch", "JavaScript", r#"async function fetchUserData(userId) {
    const url = `https://api.example.com/users/${userId}`;
    
    try {
        const response = await fetch(url);
        
        if (!response.ok) {
            throw new Error(`HTTP error! status: ${response.status}`);
        }
        
        const data = await response.json();
        console.log("User data received:", data);
        return data;
    } catch (error) {
        console.error("Could not fetch user data:", error);
        return null;
    }
}

// Call the function
fetchUserData(12345);"#),
    ("Python - Fibonacci Recursive", "Python", r#"def fibonacci(n):
    """
    Calculate the nth Fibonacci number using recursion.
    """
    if n <= 0:
        return 0
    elif n == 1:
        return 1
    else:
        return fibonacci(n-1) + fibonacci(n-2)

# Calculate first 10 numbers
for i in range(10):
    print(f"Fibonacci({i}) = {fibonacci(i)}")"#),
];

/// Case-insensitive lookup by full name or by any substring of it.
pub fn find_sample(name: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    let wanted = name.trim().to_lowercase();
    SAMPLE_CODES
        .iter()
        .find(|(sample, _, _)| sample.to_lowercase() == wanted)
        .or_else(|| SAMPLE_CODES.iter().find(|(sample, _, _)| sample.to_lowercase().contains(&wanted)))
}
