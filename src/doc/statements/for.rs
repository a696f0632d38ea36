/*!
# `FOR <variable> = x TO y [STEP z]`
Where x, y, and z are integer expressions.
## Purpose
Used with `NEXT` to repeat statements while counting.

## Remarks
The variable must be an integer variable. The step is 1 when left out.
The loop stops as soon as the variable reaches or passes `y`, so `y`
itself is never used and a loop that starts at or past `y` does not
run at all. With a negative step the loop counts down.

`y` and `z` are evaluated again every time the loop comes around.

## Example 1
```text
FOR i = 0 TO 30 STEP 10
PRINT i
NEXT
```
```text
0
10
20
```

## Example 2
```text
FOR x = 1 TO 3
FOR y = 5 TO 7
PRINT x * 10 + y
NEXT
NEXT
```
```text
15
16
25
26
```

*/
